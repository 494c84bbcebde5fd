use crate::core::dataset::{Resource, ResourceType};
use crate::domain::resources::{Brand, CatalogItem, Railway, Scale};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// A resource file turned into its typed models
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResource {
    Brands(Vec<Brand>),
    CatalogItems(Vec<CatalogItem>),
    Railways(Vec<Railway>),
    Scales(Vec<Scale>),
}

impl ParsedResource {
    pub fn len(&self) -> usize {
        match self {
            ParsedResource::Brands(v) => v.len(),
            ParsedResource::CatalogItems(v) => v.len(),
            ParsedResource::Railways(v) => v.len(),
            ParsedResource::Scales(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resource parse failure
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid {resource_type} resource: {source}")]
    InvalidResource {
        resource_type: ResourceType,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses dataset resources into typed models
#[derive(Debug, Default, Clone, Copy)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a resource. The file may hold one object or an array of them.
    pub fn parse(&self, resource: &Resource) -> Result<ParsedResource, ParseError> {
        let content = resource.content.as_str();
        let parsed = match resource.resource_type {
            ResourceType::Brands => {
                ParsedResource::Brands(parse_many(resource.resource_type, content)?)
            }
            ResourceType::CatalogItems => {
                ParsedResource::CatalogItems(parse_many(resource.resource_type, content)?)
            }
            ResourceType::Railways => {
                ParsedResource::Railways(parse_many(resource.resource_type, content)?)
            }
            ResourceType::Scales => {
                ParsedResource::Scales(parse_many(resource.resource_type, content)?)
            }
        };
        Ok(parsed)
    }
}

fn parse_many<T: DeserializeOwned>(
    resource_type: ResourceType,
    content: &str,
) -> Result<Vec<T>, ParseError> {
    let invalid = |source| ParseError::InvalidResource { resource_type, source };

    if content.trim_start().starts_with('[') {
        serde_json::from_str(content).map_err(invalid)
    } else {
        serde_json::from_str(content).map(|one| vec![one]).map_err(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resources::{BrandKind, Category, PowerMethod, RollingStockCategory, Socket};
    use std::path::PathBuf;

    fn resource_from_json(value: &str, resource_type: ResourceType) -> Resource {
        Resource {
            file_name: "test_resource.json".to_string(),
            path: PathBuf::from("test_resource.json"),
            resource_type,
            content: value.to_string(),
        }
    }

    #[test]
    fn it_should_parse_a_valid_brand() {
        let resource = resource_from_json(
            r#"
            {
              "name" : "ACME",
              "registered_company_name" : "Associazione Costruzioni Modellistiche Esatte",
              "organization_entity_type" : "OTHER",
              "group_name" : null,
              "description" : { "it" : null, "en" : null },
              "address" : {
                "street_address" : "Viale Lombardia, 27",
                "extended_address" : null,
                "postal_code" : "20131",
                "city" : "Milano",
                "region" : "MI",
                "country" : "IT"
              },
              "contact_info" : {
                "email" : "mail@acmetreni.com",
                "phone" : null,
                "website_url" : "http://www.acmetreni.com"
              },
              "socials" : { "facebook" : null, "instagram" : null, "linkedin" : null, "twitter" : null, "youtube" : null },
              "kind" : "INDUSTRIAL",
              "status" : "ACTIVE"
            }"#,
            ResourceType::Brands,
        );

        match Parser::new().parse(&resource).unwrap() {
            ParsedResource::Brands(brands) => {
                assert_eq!(brands.len(), 1);
                assert_eq!(brands[0].name, "ACME");
                assert_eq!(brands[0].kind, BrandKind::Industrial);
                assert_eq!(brands[0].address.as_ref().unwrap().city, "Milano");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn it_should_parse_a_valid_catalog_item() {
        let resource = resource_from_json(
            r#"
            {
              "brand" : "ACME",
              "item_number" : "60023",
              "scale" : "H0",
              "category" : "LOCOMOTIVES",
              "description" : { "it" : "XMPR FS Trenitalia", "en" : null },
              "details" : { "it" : null, "en" : null },
              "power_method" : "DC",
              "delivery_date" : "2022",
              "availability_status" : "AVAILABLE",
              "rolling_stocks" : [ {
                "category" : "LOCOMOTIVE",
                "class_name" : "E402 A",
                "road_number" : "E402 031",
                "locomotive_type" : "ELECTRIC_LOCOMOTIVE",
                "railway" : "FS",
                "epoch" : "VI",
                "dcc_interface" : "MTC_21",
                "control" : "DCC_READY",
                "length_over_buffer" : { "inches" : null, "millimeters" : 210.0 },
                "technical_specifications" : {
                  "minimum_radius" : 360.0,
                  "coupling" : { "socket" : "NEM_362", "close_couplers" : "NO", "digital_shunting" : "NO" },
                  "flywheel_fitted" : "NO",
                  "metal_body" : "NO",
                  "interior_lights" : "NO",
                  "lights" : "YES",
                  "spring_buffers" : "NO"
                },
                "is_dummy" : false
              } ],
              "count" : 1
            }"#,
            ResourceType::CatalogItems,
        );

        match Parser::new().parse(&resource).unwrap() {
            ParsedResource::CatalogItems(items) => {
                let item = &items[0];
                assert_eq!(item.category, Category::Locomotives);
                assert_eq!(item.power_method, PowerMethod::Dc);
                let rs = &item.rolling_stocks[0];
                assert_eq!(rs.category, RollingStockCategory::Locomotive);
                let socket = rs
                    .technical_specifications
                    .as_ref()
                    .and_then(|ts| ts.coupling.as_ref())
                    .and_then(|c| c.socket);
                assert_eq!(socket, Some(Socket::Nem362));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn it_should_parse_a_valid_railway() {
        let resource = resource_from_json(
            r#"
            {
              "name" : "FS",
              "abbreviation" : "FS",
              "registered_company_name" : "Ferrovie dello Stato Italiane S.p.A.",
              "organization_entity_type" : "STATE_OWNED_ENTERPRISE",
              "country" : "IT",
              "period_of_activity" : { "operating_since" : "1905-07-01", "operating_until" : null, "status" : "ACTIVE" },
              "gauge" : { "track_gauge" : "STANDARD", "meters" : 1.435 },
              "total_length" : { "kilometers" : 24564.0, "miles" : null },
              "social" : { "instagram" : "fsitaliane" },
              "headquarters" : [ "Roma" ]
            }"#,
            ResourceType::Railways,
        );

        let parsed = Parser::new().parse(&resource).unwrap();
        assert_eq!(parsed.len(), 1);
        if let ParsedResource::Railways(railways) = parsed {
            assert_eq!(railways[0].headquarters, vec!["Roma".to_string()]);
        }
    }

    #[test]
    fn it_should_parse_an_array_of_scales() {
        let resource = resource_from_json(
            r#"[
              { "name" : "H0", "ratio" : 87.0, "gauge" : { "millimeters" : 16.5, "track_gauge" : "STANDARD" }, "standards" : [ "NEM" ] },
              { "name" : "N", "ratio" : 160.0, "gauge" : { "millimeters" : 9.0, "track_gauge" : "STANDARD" } }
            ]"#,
            ResourceType::Scales,
        );

        let parsed = Parser::new().parse(&resource).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn it_should_report_malformed_json() {
        let resource = resource_from_json("{ \"name\": ", ResourceType::Brands);
        let err = Parser::new().parse(&resource).unwrap_err();
        assert!(err.to_string().starts_with("invalid brands resource"));
    }

    #[test]
    fn it_should_report_missing_fields() {
        let resource = resource_from_json(r#"{ "name": "FS" }"#, ResourceType::Railways);
        let err = Parser::new().parse(&resource).unwrap_err();
        assert!(err.to_string().contains("country"));
    }
}
