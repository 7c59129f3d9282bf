use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use uuid::Uuid;

use super::{NewOrganization, Organization, OrganizationServiceError};
use crate::domain::shared::{from_minor_units, to_minor_units};

/// Organization as returned by the API: minor units plus their decimal form
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    pub id: Uuid,
    pub name: String,
    pub code: Option<String>,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub ico: Option<String>,
    pub dic: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hourly_rate_cents: i64,
    pub kilometer_rate_cents: i64,
    pub outsourcing_fee_cents: i64,
    pub hardware_margin_pct: i32,
    pub software_margin_pct: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub hourly_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub kilometer_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub outsourcing_fee: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Organization> for OrganizationResponse {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id,
            name: org.name,
            code: org.code,
            contact_person: org.contact_person,
            address: org.address,
            ico: org.ico,
            dic: org.dic,
            email: org.email,
            phone: org.phone,
            hourly_rate: from_minor_units(org.hourly_rate_cents),
            kilometer_rate: from_minor_units(org.kilometer_rate_cents),
            outsourcing_fee: from_minor_units(org.outsourcing_fee_cents),
            hourly_rate_cents: org.hourly_rate_cents,
            kilometer_rate_cents: org.kilometer_rate_cents,
            outsourcing_fee_cents: org.outsourcing_fee_cents,
            hardware_margin_pct: org.hardware_margin_pct,
            software_margin_pct: org.software_margin_pct,
            is_active: org.is_active,
            created_at: org.created_at,
            updated_at: org.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrganizationListResponse {
    pub data: Vec<OrganizationResponse>,
    pub total: usize,
}

/// Create/update body. Money may be sent as a decimal (`hourlyRate`) or in
/// minor units (`hourlyRateCents`); the decimal wins when both are present.
/// Amounts stay raw JSON: a number or a numeric string, decimal comma allowed.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationPayload {
    pub name: Option<String>,
    pub code: Option<String>,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub ico: Option<String>,
    pub dic: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hourly_rate: Option<Value>,
    pub hourly_rate_cents: Option<Value>,
    pub kilometer_rate: Option<Value>,
    #[serde(alias = "kmRate")]
    pub kilometer_rate_cents: Option<Value>,
    pub outsourcing_fee: Option<Value>,
    pub outsourcing_fee_cents: Option<Value>,
    pub hardware_margin_pct: Option<i32>,
    pub software_margin_pct: Option<i32>,
    pub is_active: Option<bool>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Read an amount sent as a JSON number or a numeric string.
/// `null` and blank strings count as absent.
fn parse_amount(value: Option<&Value>) -> Result<Option<Decimal>, OrganizationServiceError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(whole) => Ok(Some(Decimal::from(whole))),
            None => parse_decimal(&number.to_string())
                .map(Some)
                .ok_or_else(invalid_rates),
        },
        Some(Value::String(text)) => {
            let normalized = text.replacen(',', ".", 1);
            let normalized = normalized.trim();
            if normalized.is_empty() {
                return Ok(None);
            }
            parse_decimal(normalized).map(Some).ok_or_else(invalid_rates)
        }
        Some(_) => Err(invalid_rates()),
    }
}

fn resolve_minor_units(
    value: Option<&Value>,
    cents: Option<&Value>,
) -> Result<Option<i64>, OrganizationServiceError> {
    if let Some(amount) = parse_amount(value)? {
        return to_minor_units(amount).map(Some).ok_or_else(invalid_rates);
    }

    match parse_amount(cents)? {
        Some(cents) => cents
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Some)
            .ok_or_else(invalid_rates),
        None => Ok(None),
    }
}

fn invalid_rates() -> OrganizationServiceError {
    OrganizationServiceError::Invalid("Invalid rates, values must be numbers".to_string())
}

impl OrganizationPayload {
    /// Validate into column values. Name and both rates are required.
    pub fn into_new_organization(self) -> Result<NewOrganization, OrganizationServiceError> {
        let name = non_blank(self.name).ok_or_else(|| {
            OrganizationServiceError::Invalid("Organization name is required".to_string())
        })?;

        let hourly_rate_cents =
            resolve_minor_units(self.hourly_rate.as_ref(), self.hourly_rate_cents.as_ref())?
                .ok_or_else(invalid_rates)?;
        let kilometer_rate_cents = resolve_minor_units(
            self.kilometer_rate.as_ref(),
            self.kilometer_rate_cents.as_ref(),
        )?
        .ok_or_else(invalid_rates)?;
        let outsourcing_fee_cents = resolve_minor_units(
            self.outsourcing_fee.as_ref(),
            self.outsourcing_fee_cents.as_ref(),
        )?
        .unwrap_or(0);

        if hourly_rate_cents < 0 || kilometer_rate_cents < 0 || outsourcing_fee_cents < 0 {
            return Err(invalid_rates());
        }

        Ok(NewOrganization {
            name,
            code: non_blank(self.code),
            contact_person: non_blank(self.contact_person),
            address: non_blank(self.address),
            ico: non_blank(self.ico),
            dic: non_blank(self.dic),
            email: non_blank(self.email),
            phone: non_blank(self.phone),
            hourly_rate_cents,
            kilometer_rate_cents,
            hardware_margin_pct: self.hardware_margin_pct.unwrap_or(0),
            software_margin_pct: self.software_margin_pct.unwrap_or(0),
            outsourcing_fee_cents,
            is_active: self.is_active.unwrap_or(true),
        })
    }

    /// Fill every field the request left out from the stored organization
    pub fn overlay(self, existing: &Organization) -> Self {
        let hourly_given = self.hourly_rate.is_some() || self.hourly_rate_cents.is_some();
        let kilometer_given = self.kilometer_rate.is_some() || self.kilometer_rate_cents.is_some();
        let fee_given = self.outsourcing_fee.is_some() || self.outsourcing_fee_cents.is_some();

        Self {
            name: self.name.or_else(|| Some(existing.name.clone())),
            code: self.code.or_else(|| existing.code.clone()),
            contact_person: self.contact_person.or_else(|| existing.contact_person.clone()),
            address: self.address.or_else(|| existing.address.clone()),
            ico: self.ico.or_else(|| existing.ico.clone()),
            dic: self.dic.or_else(|| existing.dic.clone()),
            email: self.email.or_else(|| existing.email.clone()),
            phone: self.phone.or_else(|| existing.phone.clone()),
            hourly_rate: self.hourly_rate,
            hourly_rate_cents: if hourly_given {
                self.hourly_rate_cents
            } else {
                Some(Value::from(existing.hourly_rate_cents))
            },
            kilometer_rate: self.kilometer_rate,
            kilometer_rate_cents: if kilometer_given {
                self.kilometer_rate_cents
            } else {
                Some(Value::from(existing.kilometer_rate_cents))
            },
            outsourcing_fee: self.outsourcing_fee,
            outsourcing_fee_cents: if fee_given {
                self.outsourcing_fee_cents
            } else {
                Some(Value::from(existing.outsourcing_fee_cents))
            },
            hardware_margin_pct: self
                .hardware_margin_pct
                .or(Some(existing.hardware_margin_pct)),
            software_margin_pct: self
                .software_margin_pct
                .or(Some(existing.software_margin_pct)),
            is_active: self.is_active.or(Some(existing.is_active)),
        }
    }
}
