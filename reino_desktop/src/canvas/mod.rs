mod constellations;
mod particles;
mod world_card;

pub use constellations::ConstellationField;
pub use particles::ParticleField;
pub use world_card::WorldCard;
