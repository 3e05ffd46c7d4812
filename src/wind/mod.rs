mod model;

pub use model::{WindModel, WindSample};
