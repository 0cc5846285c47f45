//! # Voyage draft: the editable copy bound to the form
//!
//! A [`VoyageDraft`] mirrors the [`Voyage`] schema minus the server id. Form
//! inputs never address it by string path: every input is bound to a
//! [`Field`], and nested cargo keys are `Field::Cargo(CargoField::..)`, so an
//! update to `cargo.total` can only ever touch `cargo.total`.
//!
//! Inputs hand over raw strings ([`VoyageDraft::set`]) and read them back
//! ([`VoyageDraft::value`]). Dates travel through the `<input type="date">`
//! format `YYYY-MM-DD`; the empty string clears a date.

use chrono::NaiveDate;
use store::{Cargo, QuantityUnit, Voyage};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Identifier of an editable voyage field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    VesselName,
    VoyageNumber,
    DepartureDate,
    DeparturePort,
    DepartureCountry,
    ArrivalDate,
    ArrivalPort,
    ArrivalCountry,
    Cargo(CargoField),
    Agent,
    Consignee,
    Remarks,
}

/// Key inside the nested cargo record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CargoField {
    Type,
    QuantityUnit,
    Total,
    RateUsd,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::VesselName,
        Field::VoyageNumber,
        Field::DepartureDate,
        Field::DeparturePort,
        Field::DepartureCountry,
        Field::ArrivalDate,
        Field::ArrivalPort,
        Field::ArrivalCountry,
        Field::Cargo(CargoField::Type),
        Field::Cargo(CargoField::QuantityUnit),
        Field::Cargo(CargoField::Total),
        Field::Cargo(CargoField::RateUsd),
        Field::Agent,
        Field::Consignee,
        Field::Remarks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::VesselName => "Vessel Name",
            Field::VoyageNumber => "Voyage Number",
            Field::DepartureDate => "Departure Date",
            Field::DeparturePort => "Departure Port",
            Field::DepartureCountry => "Departure Country",
            Field::ArrivalDate => "Arrival Date",
            Field::ArrivalPort => "Arrival Port",
            Field::ArrivalCountry => "Arrival Country",
            Field::Cargo(CargoField::Type) => "Cargo Type",
            Field::Cargo(CargoField::QuantityUnit) => "Unit",
            Field::Cargo(CargoField::Total) => "Total",
            Field::Cargo(CargoField::RateUsd) => "Rate (USD)",
            Field::Agent => "Agent",
            Field::Consignee => "Consignee",
            Field::Remarks => "Remarks",
        }
    }

    /// Name used for the input's `name` and `id` attributes.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::VesselName => "vesselName",
            Field::VoyageNumber => "voyageNumber",
            Field::DepartureDate => "departureDate",
            Field::DeparturePort => "departurePort",
            Field::DepartureCountry => "departureCountry",
            Field::ArrivalDate => "arrivalDate",
            Field::ArrivalPort => "arrivalPort",
            Field::ArrivalCountry => "arrivalCountry",
            Field::Cargo(CargoField::Type) => "cargo.type",
            Field::Cargo(CargoField::QuantityUnit) => "cargo.quantityUnit",
            Field::Cargo(CargoField::Total) => "cargo.total",
            Field::Cargo(CargoField::RateUsd) => "cargo.rateUSD",
            Field::Agent => "agent",
            Field::Consignee => "consignee",
            Field::Remarks => "remarks",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::VesselName
                | Field::VoyageNumber
                | Field::DepartureDate
                | Field::DeparturePort
                | Field::ArrivalDate
                | Field::ArrivalPort
        )
    }

    pub fn is_date(self) -> bool {
        matches!(self, Field::DepartureDate | Field::ArrivalDate)
    }
}

/// Rejected input for a draft field. The draft is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{field} must be a date (YYYY-MM-DD), got {value:?}")]
    InvalidDate { field: &'static str, value: String },
    #[error("unit must be MT or KG, got {0:?}")]
    InvalidUnit(String),
}

/// Editable copy of a voyage.
#[derive(Clone, Debug, PartialEq)]
pub struct VoyageDraft {
    pub vessel_name: String,
    pub voyage_number: String,
    pub departure_date: Option<NaiveDate>,
    pub departure_port: String,
    pub departure_country: String,
    pub arrival_date: Option<NaiveDate>,
    pub arrival_port: String,
    pub arrival_country: String,
    pub cargo: Cargo,
    pub agent: String,
    pub consignee: String,
    pub remarks: String,
}

impl Default for VoyageDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl VoyageDraft {
    /// Blank template for a new voyage.
    pub fn new() -> Self {
        Self {
            vessel_name: String::new(),
            voyage_number: String::new(),
            departure_date: None,
            departure_port: String::new(),
            departure_country: String::new(),
            arrival_date: None,
            arrival_port: String::new(),
            arrival_country: String::new(),
            cargo: Cargo {
                r#type: String::new(),
                quantity_unit: QuantityUnit::Mt,
                total: String::new(),
                rate_usd: String::new(),
            },
            agent: String::new(),
            consignee: String::new(),
            remarks: String::new(),
        }
    }

    /// Draft for editing an existing voyage, every field copied on its own.
    pub fn from_voyage(voyage: &Voyage) -> Self {
        Self {
            vessel_name: voyage.vessel_name.clone(),
            voyage_number: voyage.voyage_number.clone(),
            departure_date: voyage.departure_date,
            departure_port: voyage.departure_port.clone(),
            departure_country: voyage.departure_country.clone(),
            arrival_date: voyage.arrival_date,
            arrival_port: voyage.arrival_port.clone(),
            arrival_country: voyage.arrival_country.clone(),
            cargo: Cargo {
                r#type: voyage.cargo.r#type.clone(),
                quantity_unit: voyage.cargo.quantity_unit,
                total: voyage.cargo.total.clone(),
                rate_usd: voyage.cargo.rate_usd.clone(),
            },
            agent: voyage.agent.clone(),
            consignee: voyage.consignee.clone(),
            remarks: voyage.remarks.clone(),
        }
    }

    /// The string an input bound to `field` displays.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::DepartureDate => format_date(self.departure_date),
            Field::ArrivalDate => format_date(self.arrival_date),
            Field::Cargo(CargoField::QuantityUnit) => self.cargo.quantity_unit.as_str().to_string(),
            text => self.text(text).map(String::clone).unwrap_or_default(),
        }
    }

    /// Apply raw input to exactly one field.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), DraftError> {
        match field {
            Field::DepartureDate => self.departure_date = parse_date(field, raw)?,
            Field::ArrivalDate => self.arrival_date = parse_date(field, raw)?,
            Field::Cargo(CargoField::QuantityUnit) => {
                self.cargo.quantity_unit = raw
                    .parse()
                    .map_err(|_| DraftError::InvalidUnit(raw.to_string()))?;
            }
            text => {
                if let Some(slot) = self.text_mut(text) {
                    *slot = raw.to_string();
                }
            }
        }
        Ok(())
    }

    /// Required fields that are still blank, in form order.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .filter(|&f| match f {
                Field::DepartureDate => self.departure_date.is_none(),
                Field::ArrivalDate => self.arrival_date.is_none(),
                text => self.text(text).map_or(true, |s| s.trim().is_empty()),
            })
            .collect()
    }

    /// Request body for create/update. Never carries an id.
    pub fn to_voyage(&self) -> Voyage {
        Voyage {
            id: None,
            vessel_name: self.vessel_name.clone(),
            voyage_number: self.voyage_number.clone(),
            departure_date: self.departure_date,
            departure_port: self.departure_port.clone(),
            departure_country: self.departure_country.clone(),
            arrival_date: self.arrival_date,
            arrival_port: self.arrival_port.clone(),
            arrival_country: self.arrival_country.clone(),
            cargo: self.cargo.clone(),
            agent: self.agent.clone(),
            consignee: self.consignee.clone(),
            remarks: self.remarks.clone(),
        }
    }

    fn text(&self, field: Field) -> Option<&String> {
        Some(match field {
            Field::VesselName => &self.vessel_name,
            Field::VoyageNumber => &self.voyage_number,
            Field::DeparturePort => &self.departure_port,
            Field::DepartureCountry => &self.departure_country,
            Field::ArrivalPort => &self.arrival_port,
            Field::ArrivalCountry => &self.arrival_country,
            Field::Cargo(CargoField::Type) => &self.cargo.r#type,
            Field::Cargo(CargoField::Total) => &self.cargo.total,
            Field::Cargo(CargoField::RateUsd) => &self.cargo.rate_usd,
            Field::Agent => &self.agent,
            Field::Consignee => &self.consignee,
            Field::Remarks => &self.remarks,
            Field::DepartureDate | Field::ArrivalDate | Field::Cargo(CargoField::QuantityUnit) => {
                return None
            }
        })
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        Some(match field {
            Field::VesselName => &mut self.vessel_name,
            Field::VoyageNumber => &mut self.voyage_number,
            Field::DeparturePort => &mut self.departure_port,
            Field::DepartureCountry => &mut self.departure_country,
            Field::ArrivalPort => &mut self.arrival_port,
            Field::ArrivalCountry => &mut self.arrival_country,
            Field::Cargo(CargoField::Type) => &mut self.cargo.r#type,
            Field::Cargo(CargoField::Total) => &mut self.cargo.total,
            Field::Cargo(CargoField::RateUsd) => &mut self.cargo.rate_usd,
            Field::Agent => &mut self.agent,
            Field::Consignee => &mut self.consignee,
            Field::Remarks => &mut self.remarks,
            Field::DepartureDate | Field::ArrivalDate | Field::Cargo(CargoField::QuantityUnit) => {
                return None
            }
        })
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_date(field: Field, raw: &str) -> Result<Option<NaiveDate>, DraftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|_| DraftError::InvalidDate {
            field: field.label(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atlas_draft() -> VoyageDraft {
        let mut draft = VoyageDraft::new();
        for (field, value) in [
            (Field::VesselName, "MV Atlas"),
            (Field::VoyageNumber, "V100"),
            (Field::DeparturePort, "Singapore"),
            (Field::ArrivalPort, "Rotterdam"),
            (Field::DepartureDate, "2024-01-01"),
            (Field::ArrivalDate, "2024-02-01"),
            (Field::Cargo(CargoField::Type), "Grain"),
            (Field::Cargo(CargoField::QuantityUnit), "MT"),
            (Field::Cargo(CargoField::Total), "5000"),
            (Field::Cargo(CargoField::RateUsd), "20"),
        ] {
            draft.set(field, value).unwrap();
        }
        draft
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = VoyageDraft::new();
        assert_eq!(draft.cargo.quantity_unit, QuantityUnit::Mt);
        assert_eq!(draft.value(Field::DepartureDate), "");
        assert_eq!(draft.value(Field::Cargo(CargoField::QuantityUnit)), "MT");
        assert_eq!(draft.missing_required().len(), 6);
    }

    #[test]
    fn test_cargo_total_touches_only_total() {
        let mut draft = atlas_draft();
        let before = draft.clone();

        draft.set(Field::Cargo(CargoField::Total), "7500").unwrap();

        assert_eq!(draft.cargo.total, "7500");
        assert_eq!(draft.cargo.r#type, before.cargo.r#type);
        assert_eq!(draft.cargo.quantity_unit, before.cargo.quantity_unit);
        assert_eq!(draft.cargo.rate_usd, before.cargo.rate_usd);
        assert_eq!(
            VoyageDraft {
                cargo: before.cargo.clone(),
                ..draft.clone()
            },
            before
        );
    }

    #[test]
    fn test_top_level_field_does_not_touch_cargo() {
        let mut draft = atlas_draft();
        draft.set(Field::Remarks, "Draft survey pending").unwrap();
        assert_eq!(draft.remarks, "Draft survey pending");
        assert_eq!(draft.cargo, atlas_draft().cargo);
    }

    #[test]
    fn test_every_field_roundtrips_through_value() {
        let draft = atlas_draft();
        let mut copy = VoyageDraft::new();
        for field in Field::ALL {
            copy.set(field, &draft.value(field)).unwrap();
        }
        assert_eq!(copy, draft);
    }

    #[test]
    fn test_invalid_input_leaves_draft_unchanged() {
        let mut draft = atlas_draft();

        let err = draft.set(Field::ArrivalDate, "next week").unwrap_err();
        assert!(matches!(err, DraftError::InvalidDate { field: "Arrival Date", .. }));

        let err = draft.set(Field::Cargo(CargoField::QuantityUnit), "LB").unwrap_err();
        assert_eq!(err, DraftError::InvalidUnit("LB".to_string()));

        assert_eq!(draft, atlas_draft());
    }

    #[test]
    fn test_empty_date_clears() {
        let mut draft = atlas_draft();
        draft.set(Field::DepartureDate, "").unwrap();
        assert_eq!(draft.departure_date, None);
        assert_eq!(draft.missing_required(), vec![Field::DepartureDate]);
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut draft = atlas_draft();
        draft.set(Field::VesselName, "   ").unwrap();
        assert_eq!(draft.missing_required(), vec![Field::VesselName]);
    }

    #[test]
    fn test_from_voyage_copies_every_field() {
        let voyage: Voyage = serde_json::from_value(serde_json::json!({
            "_id": "65a1f0",
            "vesselName": "MV Atlas",
            "voyageNumber": "V100",
            "departureDate": "2024-01-01T00:00:00.000Z",
            "cargo": { "type": "Grain", "rateUSD": "20" },
            "consignee": "Cargill"
        }))
        .unwrap();

        let draft = VoyageDraft::from_voyage(&voyage);
        assert_eq!(draft.value(Field::DepartureDate), "2024-01-01");
        assert_eq!(draft.value(Field::ArrivalDate), "");
        assert_eq!(draft.cargo.quantity_unit, QuantityUnit::Mt);
        assert_eq!(draft.cargo.total, "");
        assert_eq!(draft.consignee, "Cargill");
        assert_eq!(draft.agent, "");

        let payload = draft.to_voyage();
        assert_eq!(payload.id, None);
        assert_eq!(Voyage { id: voyage.id.clone(), ..payload }, voyage);
    }

    #[test]
    fn test_payload_matches_atlas_example() {
        let body = serde_json::to_value(atlas_draft().to_voyage()).unwrap();
        assert_eq!(body["vesselName"], "MV Atlas");
        assert_eq!(body["departureDate"], "2024-01-01T00:00:00.000Z");
        assert_eq!(body["arrivalDate"], "2024-02-01T00:00:00.000Z");
        assert_eq!(
            body["cargo"],
            serde_json::json!({ "type": "Grain", "quantityUnit": "MT", "total": "5000", "rateUSD": "20" })
        );
        assert!(body.get("_id").is_none());
    }
}
