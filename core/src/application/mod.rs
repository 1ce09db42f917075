use crate::{
    domain::{
        common::{KitchenConfig, entities::app_errors::CoreError, services::Service},
        kitchen::Kitchen,
    },
    infrastructure::llm::GeminiLLMClient,
};

pub type KitchenService = Service<GeminiLLMClient>;

pub type FerrisKitchen = Kitchen<KitchenService>;

pub fn create_service(config: KitchenConfig) -> Result<KitchenService, CoreError> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;

    Ok(Service::new(llm_client))
}

pub fn create_kitchen(config: KitchenConfig) -> Result<FerrisKitchen, CoreError> {
    let service = create_service(config)?;

    Ok(Kitchen::new(service))
}
