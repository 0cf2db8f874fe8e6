//! Fixture seed
//!
//! Static starting data for the catalog browser: one catalog, one schema and
//! five tables. Only the "Appropriations" table carries columns at rest; the
//! other tables get theirs from [`table_columns`] when a table view
//! reconciles them.

use crate::model::*;

/// Name of the seeded catalog
pub const SEED_CATALOG: &str = "ELM";

/// Name of the seeded schema
pub const SEED_SCHEMA: &str = "Appropriations";

/// Directory identities offered as access-request suggestions
pub const DIRECTORY_USERS: &[&str] = &[
    "john.doe@falck.com",
    "jane.smith@falck.com",
    "mike.johnson@falck.com",
    "emily.brown@falck.com",
    "david.wilson@falck.com",
];

/// Build the seed forest with deterministic ids
pub fn seed_forest() -> Forest {
    let mut schema = schema_seed();
    schema.tables = table_seeds();
    if let Some(table) = schema.tables.iter_mut().find(|t| t.name == "Appropriations") {
        table.columns = table_columns("Appropriations").unwrap_or_default();
    }

    let mut catalog = catalog_seed();
    catalog.schemas = vec![schema];

    let mut forest = Forest::new(vec![catalog]);
    forest.assign_missing_ids();
    forest
}

fn catalog_seed() -> Catalog {
    Catalog {
        display_name: Some("Employee & Labor Market".to_string()),
        description: Some(
            "Contains data related to employee management and labor market analytics.".to_string(),
        ),
        business_areas: vec![
            area("Human Resources", "Manages employee data, recruitment, and performance evaluations."),
            area("Payroll", "Handles salary calculations, tax deductions, and benefit management."),
            area("Labor Analytics", "Provides insights into labor market trends and workforce planning."),
        ],
        terminology: vec![
            term("FTE", "Full-Time Equivalent, a unit that indicates the workload of an employed person."),
            term(
                "Turnover Rate",
                "The percentage of employees who leave an organization during a certain period of time.",
            ),
            term(
                "Compensation Ratio",
                "The ratio of an employee's salary to the median salary for similar positions in the market.",
            ),
        ],
        analytics: vec![
            dashboard(
                "Employee Retention Dashboard",
                "Visualizes employee turnover rates and factors affecting retention.",
                "/mock-dashboard/employee-retention",
            ),
            dashboard(
                "Recruitment Funnel Analysis",
                "Analyzes the efficiency of the recruitment process from application to hire.",
                "/mock-dashboard/recruitment-funnel",
            ),
            dashboard(
                "Workforce Diversity Report",
                "Provides insights into the diversity and inclusion metrics of the organization.",
                "/mock-dashboard/workforce-diversity",
            ),
        ],
        ..Catalog::new(SEED_CATALOG)
    }
}

fn schema_seed() -> Schema {
    Schema {
        display_name: Some("Appropriations Schema".to_string()),
        description: Some("Contains all appropriation-related data assets".to_string()),
        overview: Some(
            "Appropriations grant consumers access to seek a number of treatments at Falck clinics \
             or external integration clinics. This schema models the process from appropriation \
             creation to treatment and invoicing."
                .to_string(),
        ),
        operations: vec![
            Operation {
                title: "Admin Registration".to_string(),
                description: "An admin or employee in a health advisory center registers an appropriation on a client."
                    .to_string(),
            },
            Operation {
                title: "Self-Service Registration".to_string(),
                description: "An employee logs into the self-service portal to register an appropriation.".to_string(),
            },
            Operation {
                title: "External Clinic Booking".to_string(),
                description: "Creation of a booking at an external clinic, generating an appropriation for invoices."
                    .to_string(),
            },
        ],
        business_glossary: vec![
            term("Treatment Appropriation", "An authorization for a client to access a number of treatments."),
            term(
                "Treatment Appropriation Line",
                "One booking within an appropriation. Not all lines are necessarily used.",
            ),
            term("Generic Appropriation", "An appropriation for treatments at internal Falck clinics."),
            term("External Vendor Appropriation", "An appropriation for treatments at external clinics."),
        ],
        data_modeling: Some(DataModeling {
            description: "Appropriations are modeled as a single table named \"Appropriations\" with line-level granularity."
                .to_string(),
            flags: vec![
                flag("IsUsedTreatment", "Indicates if an appropriation line turned into an actual treatment."),
                flag("IsGenericAppropriation", "Indicates if the appropriation was carried out at internal clinics."),
                flag(
                    "IsFirstTreatment",
                    "Marks the first treatment in an appropriation, which might incur higher costs.",
                ),
            ],
            dimensions: strings(&["Customer", "CustomerDepartment", "Consumer", "Service", "Network"]),
            source_tables: strings(&[
                "TreatmentAppropriation",
                "TreatmentAppropriationLine",
                "TreatmentAppropriationLineProduct",
                "User",
                "UserClientInfo",
                "Customer",
            ]),
            semantic_modeling: vec![
                measure(
                    "Number of Appropriations",
                    "Uniquely counts appropriations aggregated over the appropriation creation date.",
                ),
                measure(
                    "Number of Appropriation Lines",
                    "Uniquely counts appropriation lines aggregated over the appropriation creation date.",
                ),
                measure(
                    "Number of Appropriation Treatments",
                    "Uniquely counts used appropriation lines aggregated over the treatment date.",
                ),
            ],
        }),
        ..Schema::new(SEED_SCHEMA)
    }
}

fn table_seeds() -> Vec<Table> {
    vec![
        Table::new("Appropriations")
            .with_display_name("Appropriations Table")
            .with_description("Contains detailed information about appropriations and their usage"),
        Table::new("Customer")
            .with_display_name("Customer Dimension")
            .with_description("Contains customer information for appropriations"),
        Table::new("Consumer")
            .with_display_name("Consumer Dimension")
            .with_description("Contains consumer information for appropriations"),
        Table::new("Service")
            .with_display_name("Service Dimension")
            .with_description("Contains service information for appropriations"),
        Table::new("Clinic")
            .with_display_name("Clinic Dimension")
            .with_description("Contains clinic information for appropriations"),
    ]
}

/// Side fixture: the reference column list for a table, keyed by table name
pub fn table_columns(table: &str) -> Option<Vec<Column>> {
    let columns = match table {
        "Appropriations" => vec![
            Column::new("AppropriationID", "int")
                .with_description("Unique identifier for each appropriation")
                .with_downstream(&["Customer.AppropriationID", "Consumer.AppropriationID"]),
            Column::new("CustomerID", "int")
                .with_description("Foreign key to Customer dimension")
                .with_upstream(&["Customer.CustomerID"]),
            Column::new("ConsumerID", "int")
                .with_description("Identifier for the consumer receiving the appropriation")
                .with_pii(true)
                .with_quality_score(99.8)
                .with_upstream(&["Consumer.ConsumerID"]),
            Column::new("ServiceID", "int")
                .with_description("Foreign key to Service dimension")
                .with_upstream(&["Service.ServiceID"]),
            Column::new("ClinicID", "int")
                .with_description("Foreign key to Clinic dimension")
                .with_quality_score(99.9)
                .with_upstream(&["Clinic.ClinicID"]),
            Column::new("CreationDate", "date").with_description("Date when the appropriation was created"),
            Column::new("ExpiryDate", "date")
                .with_description("Date when the appropriation expires")
                .with_quality_score(99.7),
            Column::new("TreatmentDate", "date")
                .with_description("Date of the treatment")
                .with_quality_score(98.5),
            Column::new("IsUsedTreatment", "boolean").with_description("Indicates if the appropriation was used"),
            Column::new("InvoiceAmount", "decimal")
                .with_description("Amount invoiced for the treatment")
                .with_quality_score(99.9),
            Column::new("PaidDate", "date")
                .with_description("Date the invoice was paid")
                .with_quality_score(97.8),
            Column::new("IsGenericAppropriation", "boolean")
                .with_description("Indicates if it's a generic appropriation"),
            Column::new("IsFirstTreatment", "boolean")
                .with_description("Indicates if it's the first treatment in the appropriation"),
            Column::new("ExternalVendorID", "int")
                .with_description("Identifier for external vendors, null for internal clinics")
                .with_quality_score(99.5),
        ],
        "Customer" => vec![
            Column::new("CustomerID", "int")
                .with_description("Unique identifier for each customer")
                .with_downstream(&["Appropriations.CustomerID"]),
            Column::new("CustomerName", "varchar")
                .with_description("Name of the customer")
                .with_pii(true)
                .with_quality_score(99.9),
            Column::new("CustomerType", "varchar").with_description("Type of customer (e.g., Individual, Corporate)"),
        ],
        "Consumer" => vec![
            Column::new("ConsumerID", "int")
                .with_description("Unique identifier for each consumer")
                .with_downstream(&["Appropriations.ConsumerID"]),
            Column::new("ConsumerName", "varchar")
                .with_description("Name of the consumer")
                .with_pii(true)
                .with_quality_score(99.8),
            Column::new("DateOfBirth", "date")
                .with_description("Date of birth of the consumer")
                .with_pii(true)
                .with_quality_score(98.5),
        ],
        "Service" => vec![
            Column::new("ServiceID", "int")
                .with_description("Unique identifier for each service")
                .with_downstream(&["Appropriations.ServiceID"]),
            Column::new("ServiceName", "varchar").with_description("Name of the service"),
            Column::new("ServiceCategory", "varchar")
                .with_description("Category of the service")
                .with_quality_score(99.9),
        ],
        "Clinic" => vec![
            Column::new("ClinicID", "int")
                .with_description("Unique identifier for each clinic")
                .with_downstream(&["Appropriations.ClinicID"]),
            Column::new("ClinicName", "varchar")
                .with_description("Name of the clinic")
                .with_quality_score(99.9),
            Column::new("ClinicLocation", "varchar")
                .with_description("Location of the clinic")
                .with_quality_score(99.5),
        ],
        _ => return None,
    };
    Some(columns)
}

fn area(name: &str, description: &str) -> BusinessArea {
    BusinessArea {
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn term(term: &str, definition: &str) -> GlossaryTerm {
    GlossaryTerm {
        term: term.to_string(),
        definition: definition.to_string(),
    }
}

fn dashboard(name: &str, description: &str, url: &str) -> AnalyticsDashboard {
    AnalyticsDashboard {
        name: name.to_string(),
        description: description.to_string(),
        url: url.to_string(),
    }
}

fn flag(name: &str, description: &str) -> Flag {
    Flag {
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn measure(measure: &str, description: &str) -> SemanticMeasure {
    SemanticMeasure {
        measure: measure.to_string(),
        description: description.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let forest = seed_forest();
        assert_eq!(forest.catalogs.len(), 1);

        let catalog = &forest.catalogs[0];
        assert_eq!(catalog.name, "ELM");
        assert_eq!(catalog.schemas.len(), 1);

        let schema = &catalog.schemas[0];
        assert_eq!(schema.name, "Appropriations");
        let names: Vec<_> = schema.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Appropriations", "Customer", "Consumer", "Service", "Clinic"]);

        assert_eq!(schema.tables[0].columns.len(), 14);
        assert!(schema.tables[1..].iter().all(|t| t.columns.is_empty()));
        assert_eq!(forest.asset_count(), 7);
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_forest(), seed_forest());
        let table = &seed_forest().catalogs[0].schemas[0].tables[4];
        assert_eq!(table.id.as_str(), "table:ELM/Appropriations/Clinic");
    }

    #[test]
    fn test_side_fixture_covers_every_seed_table() {
        for table in &seed_forest().catalogs[0].schemas[0].tables {
            assert!(table_columns(&table.name).is_some(), "no columns for {}", table.name);
        }
        assert!(table_columns("Network").is_none());
    }
}
