//! Typed models for the dataset resources.
//!
//! Field names follow the snake_case layout of the dataset JSON files and
//! enumerations use their SCREAMING_SNAKE_CASE wire names. Unknown fields are
//! ignored so that newer dataset files still load.

use serde::{Deserialize, Serialize};

/// A text with an optional translation per supported language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub it: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
}

/// Postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street_address: String,
    #[serde(default)]
    pub extended_address: Option<String>,
    pub postal_code: String,
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Social network handles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganizationEntityType {
    CivilLawPartnership,
    EntrepreneurialCompany,
    GlobalPartnership,
    LimitedCompany,
    LimitedPartnership,
    LimitedPartnershipLimitedCompany,
    Other,
    PublicInstitution,
    PublicLimitedCompany,
    RegisteredSoleTrader,
    SoleTrader,
    StateOwnedEnterprise,
}

/// Track gauge families shared by railways and scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackGauge {
    Broad,
    Medium,
    Minimum,
    Narrow,
    Standard,
}

// ---------------------------------------------------------------------------
// Brands
// ---------------------------------------------------------------------------

/// A model railway manufacturer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub registered_company_name: Option<String>,
    #[serde(default)]
    pub organization_entity_type: Option<OrganizationEntityType>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default, alias = "social")]
    pub socials: Socials,
    #[serde(default)]
    pub kind: BrandKind,
    #[serde(default)]
    pub status: Option<BrandStatus>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrandKind {
    /// Models made of brass or similar alloys, in limited quantities
    BrassModels,
    /// Die cast models
    #[default]
    Industrial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrandStatus {
    Active,
    OutOfBusiness,
}

// ---------------------------------------------------------------------------
// Railways
// ---------------------------------------------------------------------------

/// A railway company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Railway {
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub registered_company_name: Option<String>,
    #[serde(default)]
    pub organization_entity_type: Option<OrganizationEntityType>,
    pub country: String,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub period_of_activity: Option<PeriodOfActivity>,
    #[serde(default)]
    pub gauge: Option<RailwayGauge>,
    #[serde(default)]
    pub total_length: Option<RailwayLength>,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default, alias = "social")]
    pub socials: Socials,
    #[serde(default)]
    pub headquarters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodOfActivity {
    #[serde(default)]
    pub operating_since: Option<String>,
    #[serde(default)]
    pub operating_until: Option<String>,
    pub status: RailwayStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RailwayStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailwayGauge {
    pub track_gauge: TrackGauge,
    pub meters: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailwayLength {
    #[serde(default)]
    pub kilometers: Option<f64>,
    #[serde(default)]
    pub miles: Option<f64>,
}

// ---------------------------------------------------------------------------
// Scales
// ---------------------------------------------------------------------------

/// A model railway scale, like `H0` (1:87)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub name: String,
    #[serde(default)]
    pub description: LocalizedText,
    pub ratio: f64,
    pub gauge: ScaleGauge,
    #[serde(default)]
    pub standards: Vec<Standard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleGauge {
    #[serde(default)]
    pub millimeters: Option<f64>,
    #[serde(default)]
    pub inches: Option<f64>,
    pub track_gauge: TrackGauge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standard {
    #[serde(rename = "BRITISH")]
    British,
    #[serde(rename = "JAPANESE")]
    Japanese,
    #[serde(rename = "NEM")]
    Nem,
    #[serde(rename = "NMRA")]
    Nmra,
}

// ---------------------------------------------------------------------------
// Catalog items
// ---------------------------------------------------------------------------

/// A catalog item: one or more rolling stocks sold under a brand item number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub brand: String,
    pub item_number: String,
    pub scale: String,
    pub category: Category,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub details: LocalizedText,
    pub power_method: PowerMethod,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub availability_status: Option<AvailabilityStatus>,
    pub rolling_stocks: Vec<RollingStock>,
    #[serde(default = "default_count")]
    pub count: u8,
}

fn default_count() -> u8 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Locomotives,
    TrainSets,
    StarterSets,
    FreightCars,
    PassengerCars,
    ElectricMultipleUnits,
    Railcars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerMethod {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "DC")]
    Dc,
    #[serde(rename = "TRIX_EXPRESS")]
    TrixExpress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    Announced,
    Available,
    Discontinued,
}

/// A single piece of rolling stock inside a catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingStock {
    pub category: RollingStockCategory,
    pub railway: String,
    pub epoch: String,
    #[serde(default, alias = "type_name")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub road_number: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub depot: Option<String>,
    #[serde(default)]
    pub livery: Option<String>,
    #[serde(default)]
    pub dcc_interface: Option<DccInterface>,
    #[serde(default)]
    pub control: Option<Control>,
    #[serde(default)]
    pub length_over_buffer: Option<LengthOverBuffer>,
    #[serde(default)]
    pub technical_specifications: Option<TechnicalSpecifications>,
    #[serde(default)]
    pub is_dummy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RollingStockCategory {
    ElectricMultipleUnit,
    FreightCar,
    Locomotive,
    PassengerCar,
    Railcar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Control {
    /// Can be fitted with a DCC decoder
    DccReady,
    Dcc,
    DccSound,
    NoDcc,
}

/// NMRA/NEM decoder interfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DccInterface {
    #[serde(rename = "NEM_651")]
    Nem651,
    #[serde(rename = "NEM_652")]
    Nem652,
    #[serde(rename = "NEM_654")]
    Nem654,
    #[serde(rename = "PLUX_8")]
    Plux8,
    #[serde(rename = "PLUX_12")]
    Plux12,
    #[serde(rename = "PLUX_16")]
    Plux16,
    #[serde(rename = "PLUX_22")]
    Plux22,
    #[serde(rename = "NEXT_18")]
    Next18,
    #[serde(rename = "NEXT_18_S")]
    Next18S,
    #[serde(rename = "MTC_21")]
    Mtc21,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthOverBuffer {
    #[serde(default)]
    pub inches: Option<f64>,
    #[serde(default)]
    pub millimeters: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSpecifications {
    #[serde(default)]
    pub minimum_radius: Option<f64>,
    #[serde(default)]
    pub coupling: Option<Coupling>,
    #[serde(default)]
    pub flywheel_fitted: Option<FeatureFlag>,
    #[serde(default)]
    pub metal_body: Option<FeatureFlag>,
    #[serde(default)]
    pub interior_lights: Option<FeatureFlag>,
    #[serde(default)]
    pub lights: Option<FeatureFlag>,
    #[serde(default)]
    pub spring_buffers: Option<FeatureFlag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupling {
    #[serde(default)]
    pub socket: Option<Socket>,
    #[serde(default)]
    pub close_couplers: Option<FeatureFlag>,
    #[serde(default)]
    pub digital_shunting: Option<FeatureFlag>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureFlag {
    Yes,
    No,
    NotAvailable,
}

/// NEM coupler pockets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Socket {
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "NEM_355")]
    Nem355,
    #[serde(rename = "NEM_356")]
    Nem356,
    #[serde(rename = "NEM_357")]
    Nem357,
    #[serde(rename = "NEM_359")]
    Nem359,
    #[serde(rename = "NEM_360")]
    Nem360,
    #[serde(rename = "NEM_362")]
    Nem362,
    #[serde(rename = "NEM_365")]
    Nem365,
}
