use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageType {
    Mongo,
    Memory,
}

impl StorageType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "MONGO" | "MONGODB" => Some(Self::Mongo),
            "MEMORY" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage_typ: StorageType,
    pub store: StoreConfig,
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Connection parameters of the document store.
#[derive(Clone)]
pub struct StoreConfig {
    pub addresses: Vec<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub auth_source: Option<String>,
    pub tls: bool,
    pub database: String,
    pub collection: String,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("addresses", &self.addresses)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("auth_source", &self.auth_source)
            .field("tls", &self.tls)
            .field("database", &self.database)
            .field("collection", &self.collection)
            .finish()
    }
}
