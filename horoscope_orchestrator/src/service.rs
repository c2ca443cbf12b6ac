use std::sync::Arc;

use horoscope_core::{HoroscopePrompt, NarrativeGenerator, WalletProfile, ZodiacReading};
use persistence_layer::{HoroscopeRecord, HoroscopeStore};
use serde::Serialize;
use tracing::{info, warn};

use crate::{profiler::WalletProfiler, Result};

/// Everything produced for one horoscope request
#[derive(Debug, Clone, Serialize)]
pub struct HoroscopeResult {
    pub profile: WalletProfile,
    pub reading: ZodiacReading,
    pub horoscope: String,
}

/// Profile → reading → prompt → narrative → best-effort storage
#[derive(Clone)]
pub struct HoroscopeService {
    profiler: WalletProfiler,
    narrator: Arc<dyn NarrativeGenerator>,
    store: Option<Arc<dyn HoroscopeStore>>,
}

impl HoroscopeService {
    pub fn new(
        profiler: WalletProfiler,
        narrator: Arc<dyn NarrativeGenerator>,
        store: Option<Arc<dyn HoroscopeStore>>,
    ) -> Self {
        Self {
            profiler,
            narrator,
            store,
        }
    }

    pub fn profiler(&self) -> &WalletProfiler {
        &self.profiler
    }

    pub fn store(&self) -> Option<&Arc<dyn HoroscopeStore>> {
        self.store.as_ref()
    }

    pub async fn generate(&self, address: &str) -> Result<HoroscopeResult> {
        let profile = self.profiler.profile_wallet(address).await?;
        let reading = ZodiacReading::from_profile(&profile);

        let prompt = HoroscopePrompt::from_profile(&profile);
        let horoscope = self.narrator.generate(&prompt).await?;

        if let Some(store) = &self.store {
            let record = HoroscopeRecord::new(&profile, reading.sign.name, &horoscope);
            if let Err(e) = store.save_horoscope(&record).await {
                warn!("Failed to save horoscope for {}: {}", address, e);
            }
        }

        info!("✨ Horoscope ready for {} ({})", address, reading.sign.name);
        Ok(HoroscopeResult {
            profile,
            reading,
            horoscope,
        })
    }
}
