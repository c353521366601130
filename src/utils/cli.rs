use crate::config::{Config, StorageType, StoreConfig};
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Gateway listening host
    #[arg(long, env = "PAYLOAD_GATEWAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Gateway listening port
    #[arg(short, long, env = "PAYLOAD_GATEWAY_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Storage backend type (MONGO or MEMORY)
    #[arg(short, long, env = "PAYLOAD_GATEWAY_STORAGE", default_value = "MONGO")]
    pub storage: String,

    /// MongoDB replica addresses, comma separated host:port
    #[arg(
        long,
        env = "MONGO_ADDRS",
        value_delimiter = ',',
        default_value = "localhost:27017"
    )]
    pub mongo_addrs: Vec<String>,

    /// MongoDB user
    #[arg(long, env = "MONGO_USER")]
    pub mongo_user: Option<String>,

    /// MongoDB password
    #[arg(long, env = "MONGO_PASSWORD", hide_env_values = true)]
    pub mongo_password: Option<String>,

    /// Database holding the user's credentials
    #[arg(long, env = "MONGO_AUTH_SOURCE")]
    pub mongo_auth_source: Option<String>,

    /// Use TLS for the MongoDB connection
    #[arg(long, env = "MONGO_TLS", default_value_t = true, action = ArgAction::Set)]
    pub mongo_tls: bool,

    /// Database name
    #[arg(long, env = "MONGO_DATABASE", default_value = "test")]
    pub database: String,

    /// Collection name
    #[arg(long, env = "MONGO_COLLECTION", default_value = "data")]
    pub collection: String,
}

/// Turns parsed arguments into a [`Config`], collecting every problem found.
pub fn validate_config(args: &Args) -> Result<Config, Vec<String>> {
    let mut validation_errors = Vec::new();

    let storage_typ = StorageType::parse(&args.storage);
    if storage_typ.is_none() {
        validation_errors.push(format!(
            "PAYLOAD_GATEWAY_STORAGE `{}` is not one of MONGO, MEMORY",
            args.storage,
        ));
    }

    if storage_typ == Some(StorageType::Mongo) {
        if args.mongo_addrs.is_empty() {
            validation_errors.push("MONGO_ADDRS must name at least one host:port".to_string());
        }
        for addr in &args.mongo_addrs {
            if !is_valid_address(addr) {
                validation_errors.push(format!("MONGO_ADDRS entry `{addr}` is not host:port"));
            }
        }
        match (&args.mongo_user, &args.mongo_password) {
            (Some(_), None) => validation_errors
                .push("MONGO_USER is set but MONGO_PASSWORD is not".to_string()),
            (None, Some(_)) => validation_errors
                .push("MONGO_PASSWORD is set but MONGO_USER is not".to_string()),
            (None, None) => {
                tracing::warn!("MONGO_USER is not set. Connecting without authentication");
            }
            (Some(_), Some(_)) => {}
        }
        if !args.mongo_tls {
            tracing::warn!("MONGO_TLS is disabled. Payloads travel to the store in plain text");
        }
    }

    if args.database.is_empty() {
        validation_errors.push("MONGO_DATABASE must not be empty".to_string());
    }
    if args.collection.is_empty() {
        validation_errors.push("MONGO_COLLECTION must not be empty".to_string());
    }

    let Some(storage_typ) = storage_typ else {
        return Err(validation_errors);
    };
    if !validation_errors.is_empty() {
        return Err(validation_errors);
    }

    Ok(Config {
        host: args.host.clone(),
        port: args.port,
        storage_typ,
        store: StoreConfig {
            addresses: args.mongo_addrs.clone(),
            username: args.mongo_user.clone(),
            password: args.mongo_password.clone(),
            auth_source: args.mongo_auth_source.clone(),
            tls: args.mongo_tls,
            database: args.database.clone(),
            collection: args.collection.clone(),
        },
    })
}

fn is_valid_address(addr: &str) -> bool {
    match addr.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["payload-gateway"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_address_list_is_split_on_commas() {
        let args = parse(&[
            "--mongo-addrs",
            "abc-shard-00-00:27017,abc-shard-00-01:27017,abc-shard-00-02:27017",
            "--mongo-user",
            "MongoUser",
            "--mongo-password",
            "secret",
        ]);
        let config = validate_config(&args).unwrap();
        assert_eq!(config.store.addresses.len(), 3);
        assert_eq!(config.store.addresses[1], "abc-shard-00-01:27017");
        assert_eq!(config.storage_typ, StorageType::Mongo);
        assert!(config.store.tls);
    }

    #[test]
    fn test_tls_can_be_disabled() {
        let args = parse(&["--mongo-tls", "false"]);
        let config = validate_config(&args).unwrap();
        assert!(!config.store.tls);
    }

    #[test]
    fn test_malformed_address_is_rejected() {
        let args = parse(&["--mongo-addrs", "localhost:27017,nohostport,db:99999"]);
        let errors = validate_config(&args).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("nohostport"));
        assert!(errors[1].contains("db:99999"));
    }

    #[test]
    fn test_unknown_storage_is_rejected() {
        let args = parse(&["--storage", "FILESYSTEM"]);
        let errors = validate_config(&args).unwrap_err();
        assert!(errors[0].contains("FILESYSTEM"));
    }

    #[test]
    fn test_user_without_password_is_rejected() {
        let args = parse(&["--mongo-user", "MongoUser"]);
        let errors = validate_config(&args).unwrap_err();
        assert!(errors[0].contains("MONGO_PASSWORD"));
    }

    #[test]
    fn test_memory_storage_skips_store_checks() {
        let args = parse(&["--storage", "memory", "--mongo-addrs", "nohostport"]);
        let config = validate_config(&args).unwrap();
        assert_eq!(config.storage_typ, StorageType::Memory);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }
}
