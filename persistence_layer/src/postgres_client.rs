use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    HoroscopeRecord, HoroscopeStore, MintRecord, PersistenceError, ProphecyRecord, Result,
    TotalStats,
};

/// PostgreSQL client for horoscope, mint and prophecy history
#[derive(Debug, Clone)]
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect(database_url)
            .await
            .map_err(|e| {
                PersistenceError::PoolCreation(format!("PostgreSQL connection error: {}", e))
            })?;

        info!("PostgreSQL pool initialized: max_connections=20, min_connections=2");
        Ok(Self { pool })
    }

    /// Create tables and indexes if they do not exist yet
    pub async fn initialize_schema(&self) -> Result<()> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS horoscopes (
                id UUID PRIMARY KEY,
                wallet_address TEXT NOT NULL,
                zodiac_sign TEXT NOT NULL,
                horoscope_text TEXT NOT NULL,
                degen_score INTEGER NOT NULL,
                lifetime_tx_count BIGINT NOT NULL,
                most_active_chain TEXT NOT NULL,
                chains_json TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS mints (
                id UUID PRIMARY KEY,
                wallet_address TEXT NOT NULL,
                token_id BIGINT NOT NULL,
                transaction_hash TEXT NOT NULL,
                zodiac_sign TEXT NOT NULL,
                degen_score INTEGER NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS prophecies (
                id UUID PRIMARY KEY,
                address TEXT NOT NULL,
                sign TEXT NOT NULL,
                prophecy TEXT NOT NULL,
                degen_score INTEGER NOT NULL,
                lifetime_tx_count BIGINT NOT NULL,
                most_active_chain TEXT NOT NULL,
                token_uri TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_horoscopes_wallet ON horoscopes (wallet_address, created_at DESC)",
            "CREATE INDEX IF NOT EXISTS idx_mints_wallet ON mints (wallet_address, created_at DESC)",
        ];

        for statement in statements {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        info!("Database schema ready");
        Ok(())
    }

    async fn count(&self, table: &'static str) -> Result<u64> {
        let row = sqlx::query(&format!("SELECT COUNT(*) as count FROM {}", table))
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.get("count");
        Ok(count.max(0) as u64)
    }
}

fn horoscope_from_row(row: &PgRow) -> Result<HoroscopeRecord> {
    let chains_json: String = row.get("chains_json");
    Ok(HoroscopeRecord {
        id: row.get::<Uuid, _>("id"),
        wallet_address: row.get("wallet_address"),
        zodiac_sign: row.get("zodiac_sign"),
        horoscope_text: row.get("horoscope_text"),
        degen_score: row.get("degen_score"),
        lifetime_tx_count: row.get("lifetime_tx_count"),
        most_active_chain: row.get("most_active_chain"),
        chains: serde_json::from_str(&chains_json)?,
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
    })
}

fn mint_from_row(row: &PgRow) -> MintRecord {
    MintRecord {
        id: row.get("id"),
        wallet_address: row.get("wallet_address"),
        token_id: row.get("token_id"),
        transaction_hash: row.get("transaction_hash"),
        zodiac_sign: row.get("zodiac_sign"),
        degen_score: row.get("degen_score"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl HoroscopeStore for PostgresClient {
    async fn save_horoscope(&self, record: &HoroscopeRecord) -> Result<()> {
        let chains_json = serde_json::to_string(&record.chains)?;

        sqlx::query(
            r#"
            INSERT INTO horoscopes
            (id, wallet_address, zodiac_sign, horoscope_text, degen_score, lifetime_tx_count,
             most_active_chain, chains_json, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(record.id)
        .bind(&record.wallet_address)
        .bind(&record.zodiac_sign)
        .bind(&record.horoscope_text)
        .bind(record.degen_score)
        .bind(record.lifetime_tx_count)
        .bind(&record.most_active_chain)
        .bind(chains_json)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        debug!("Stored horoscope {} for {}", record.id, record.wallet_address);
        Ok(())
    }

    async fn record_mint(&self, record: &MintRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO mints
            (id, wallet_address, token_id, transaction_hash, zodiac_sign, degen_score, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id)
        .bind(&record.wallet_address)
        .bind(record.token_id)
        .bind(&record.transaction_hash)
        .bind(&record.zodiac_sign)
        .bind(record.degen_score)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        debug!(
            "Recorded mint of token {} for {}",
            record.token_id, record.wallet_address
        );
        Ok(())
    }

    async fn save_prophecy(&self, record: &ProphecyRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO prophecies
            (id, address, sign, prophecy, degen_score, lifetime_tx_count, most_active_chain,
             token_uri, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(record.id)
        .bind(&record.address)
        .bind(&record.sign)
        .bind(&record.prophecy)
        .bind(record.degen_score)
        .bind(record.lifetime_tx_count)
        .bind(&record.most_active_chain)
        .bind(&record.token_uri)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        debug!("Stored prophecy {} for {}", record.id, record.address);
        Ok(())
    }

    async fn get_user_horoscopes(&self, wallet_address: &str) -> Result<Vec<HoroscopeRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, wallet_address, zodiac_sign, horoscope_text, degen_score,
                   lifetime_tx_count, most_active_chain, chains_json, created_at
            FROM horoscopes
            WHERE wallet_address = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(wallet_address.to_lowercase())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(horoscope_from_row).collect()
    }

    async fn get_user_mints(&self, wallet_address: &str) -> Result<Vec<MintRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, wallet_address, token_id, transaction_hash, zodiac_sign, degen_score, created_at
            FROM mints
            WHERE wallet_address = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(wallet_address.to_lowercase())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(mint_from_row).collect())
    }

    async fn get_total_stats(&self) -> Result<TotalStats> {
        let (total_horoscopes, total_mints) =
            futures::try_join!(self.count("horoscopes"), self.count("mints"))?;

        Ok(TotalStats {
            total_horoscopes,
            total_mints,
        })
    }
}
