use crate::config::StoreConfig;
use crate::domain::payload::PayloadRecord;
use crate::error::AppError;
use crate::storage::PayloadStorage;

use mongodb::bson::{Document, doc};
use mongodb::options::{ClientOptions, Credential, ServerAddress, Tls, TlsOptions};
use mongodb::{Client, ClientSession, Collection};

const APP_NAME: &str = "payload-gateway";

/// Payload storage backed by a MongoDB deployment.
///
/// Holds the single process-wide [`Client`]. The client owns the connection
/// pool and performs its own replica set discovery and primary selection.
pub struct MongoStorage {
    client: Client,
    database: String,
    collection: String,
}

impl MongoStorage {
    /// Builds the client and checks that the deployment answers a `ping` with
    /// the given credentials. Nothing is retried: a failure here is meant to
    /// stop the process before it starts serving.
    pub async fn connect(config: &StoreConfig) -> Result<Self, AppError> {
        let hosts = config
            .addresses
            .iter()
            .map(|addr| {
                ServerAddress::parse(addr).map_err(|_| AppError::InvalidAddress(addr.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let credential = config.username.as_ref().map(|username| {
            Credential::builder()
                .username(username.clone())
                .password(config.password.clone())
                .source(config.auth_source.clone())
                .build()
        });

        let tls = if config.tls {
            Tls::Enabled(TlsOptions::default())
        } else {
            Tls::Disabled
        };

        let options = ClientOptions::builder()
            .hosts(hosts)
            .credential(credential)
            .tls(tls)
            .app_name(APP_NAME.to_string())
            .build();

        let client = Client::with_options(options).map_err(AppError::Connection)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(AppError::Connection)?;

        tracing::info!(
            addresses = ?config.addresses,
            database = %config.database,
            collection = %config.collection,
            "connected to payload store"
        );

        Ok(Self {
            client,
            database: config.database.clone(),
            collection: config.collection.clone(),
        })
    }

    /// Starts a lightweight session on the shared client. The session goes
    /// back to the driver's pool when dropped.
    pub async fn derive_session(&self) -> mongodb::error::Result<ClientSession> {
        self.client.start_session().await
    }

    fn collection(&self) -> Collection<Document> {
        self.client
            .database(&self.database)
            .collection(&self.collection)
    }
}

#[async_trait::async_trait]
impl PayloadStorage for MongoStorage {
    async fn insert(&self, record: PayloadRecord) -> Result<(), AppError> {
        let mut session = self.derive_session().await.map_err(AppError::Write)?;
        self.collection()
            .insert_one(Document::from(record))
            .session(&mut session)
            .await
            .map_err(AppError::Write)?;
        Ok(())
    }

    async fn find_one(&self) -> Result<PayloadRecord, AppError> {
        let mut session = self.derive_session().await.map_err(AppError::Read)?;
        let document = self
            .collection()
            .find_one(doc! {})
            .session(&mut session)
            .await
            .map_err(AppError::Read)?
            .ok_or_else(|| AppError::NotFound("payload".to_string()))?;
        PayloadRecord::try_from(document)
    }
}
