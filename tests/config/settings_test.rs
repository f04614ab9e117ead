#[cfg(test)]
mod tests {
    use sqlscout::config::{Driver, Settings, SettingsError};
    use sqlscout::filter::FormatConfig;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
catalog_snapshot = "./catalog.json"

[connections.production]
driver = "mssql"
connection_string = "sqlserver://localhost?database=crm"
default_schema = "dbo"

[connections.dev]
driver = "sqlite"
connection_string = "./data/dev.db"

[filter]
fuzzy_threshold = 75
fallback_table_count = 3
column_fallback_count = 4
full_columns_on_exact = false

[filter.format]
max_tables = 8
max_columns_per_table = 6

[llm]
model = "gpt-4o-mini"
temperature = 0.2
"#;

        let settings: Settings = toml::from_str(toml).unwrap();

        assert_eq!(settings.connections.len(), 2);
        let prod = settings.get_connection("production").unwrap();
        assert_eq!(prod.driver_type().unwrap(), Driver::Mssql);
        assert_eq!(prod.default_schema.as_deref(), Some("dbo"));

        assert_eq!(settings.filter.fuzzy_threshold, 75);
        assert_eq!(settings.filter.fallback_table_count, 3);
        assert!(!settings.filter.full_columns_on_exact);
        assert_eq!(settings.llm.model, "gpt-4o-mini");

        let config = settings.filter.to_config().unwrap();
        assert_eq!(config.fuzzy_threshold, 75);
        assert_eq!(config.column_fallback_count, 4);
        assert_eq!(config.format.max_tables, Some(8));
        assert_eq!(config.format.max_columns_per_table, Some(6));
    }

    #[test]
    fn test_relaxed_format_flag() {
        let toml = r#"
[filter.format]
relaxed = true
"#;

        let settings: Settings = toml::from_str(toml).unwrap();
        let config = settings.filter.to_config().unwrap();
        assert_eq!(config.format, FormatConfig::relaxed());
    }

    #[test]
    fn test_defaults_without_file_sections() {
        let settings: Settings = toml::from_str("").unwrap();

        assert!(settings.catalog_snapshot.is_none());
        assert_eq!(settings.filter.fuzzy_threshold, 80);
        assert_eq!(settings.filter.fallback_table_count, 5);
        assert!(settings.filter.full_columns_on_exact);
        assert_eq!(settings.filter.format.max_tables, 5);
        assert_eq!(settings.llm.temperature, 0.1);
    }

    #[test]
    fn test_connection_env_expansion() {
        std::env::set_var("SCOUT_SETTINGS_TEST_DB", "sqlserver://db01/crm");

        let toml = r#"
[connections.default]
driver = "mssql"
connection_string = "${SCOUT_SETTINGS_TEST_DB}"
"#;

        let settings: Settings = toml::from_str(toml).unwrap();
        let (name, conn) = settings.default_connection().unwrap();
        assert_eq!(name, "default");
        assert_eq!(
            conn.resolved_connection_string().unwrap(),
            "sqlserver://db01/crm"
        );

        std::env::remove_var("SCOUT_SETTINGS_TEST_DB");
    }

    #[test]
    fn test_missing_connection_is_an_error() {
        let settings: Settings = toml::from_str("").unwrap();
        let err = settings.get_connection("nope").unwrap_err();
        assert!(matches!(err, SettingsError::ConnectionNotFound(_)));
    }

    #[test]
    fn test_unsupported_driver() {
        let toml = r#"
[connections.legacy]
driver = "dbase"
connection_string = "whatever"
"#;

        let settings: Settings = toml::from_str(toml).unwrap();
        let err = settings.connections["legacy"].driver_type().unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedDriver(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Settings::from_file("/definitely/not/here/sqlscout.toml").unwrap_err();
        assert!(matches!(err, SettingsError::FileNotFound(_)));
    }
}
