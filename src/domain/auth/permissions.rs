use crate::domain::user::UserRole;

/// Access-control keys checked by the HTTP layer. `ADMIN` passes every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    QueuesRead,
    SystemAudit,
    AccountingLock,
    InvoicesGenerate,
    InvoicesExport,
    InvoicesDelete,
    WorkRecordsWrite,
    ReceivedInvoicesOcr,
    ReceivedInvoicesApprove,
    HardwareWrite,
    BillingWrite,
    BillingRead,
    OrganizationsWrite,
    UsersManage,
}

impl Permission {
    pub fn key(&self) -> &'static str {
        match self {
            Permission::QueuesRead => "queues:read",
            Permission::SystemAudit => "system:audit",
            Permission::AccountingLock => "accounting:lock",
            Permission::InvoicesGenerate => "invoices:generate",
            Permission::InvoicesExport => "invoices:export",
            Permission::InvoicesDelete => "invoices:delete",
            Permission::WorkRecordsWrite => "workRecords:write",
            Permission::ReceivedInvoicesOcr => "receivedInvoices:ocr",
            Permission::ReceivedInvoicesApprove => "receivedInvoices:approve",
            Permission::HardwareWrite => "hardware:write",
            Permission::BillingWrite => "billing:write",
            Permission::BillingRead => "billing:read",
            Permission::OrganizationsWrite => "organizations:write",
            Permission::UsersManage => "users:manage",
        }
    }

    fn allowed_roles(&self) -> &'static [UserRole] {
        use UserRole::{Accountant, Admin, Technician, Viewer};

        match self {
            Permission::QueuesRead => &[Admin],
            Permission::SystemAudit => &[Admin],
            Permission::AccountingLock => &[Admin],
            Permission::InvoicesGenerate => &[Admin, Accountant],
            Permission::InvoicesExport => &[Admin, Accountant],
            Permission::InvoicesDelete => &[Admin, Accountant],
            Permission::WorkRecordsWrite => &[Admin, Accountant, Technician],
            Permission::ReceivedInvoicesOcr => &[Admin, Accountant],
            Permission::ReceivedInvoicesApprove => &[Admin, Accountant],
            Permission::HardwareWrite => &[Admin, Accountant],
            Permission::BillingWrite => &[Admin, Accountant],
            Permission::BillingRead => &[Admin, Accountant, Viewer],
            Permission::OrganizationsWrite => &[Admin, Accountant],
            Permission::UsersManage => &[Admin],
        }
    }

    pub fn is_granted_to(&self, role: UserRole) -> bool {
        role == UserRole::Admin || self.allowed_roles().contains(&role)
    }
}
