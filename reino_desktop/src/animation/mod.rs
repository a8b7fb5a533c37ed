mod spring;
mod states;

pub use spring::Spring;
pub use states::{
    CarouselState, FaqState, LoadingState, ModalState, ParticleFieldState, ParticleSeed,
    StarfieldState, WorldCardState,
};
