pub mod cipher;
pub mod icons;
pub mod proxy;
pub mod vocab;
