pub mod config;
pub mod error;
pub mod gate;
pub mod projector;
pub mod state;

pub use config::SurveyConfig;
pub use error::{ConfigError, SurveyError};
pub use gate::*;
pub use projector::*;
pub use state::*;

pub use scm_bias_core::{
    bias_for, mean, quadrant, Bias, Dimension, Quadrant, QuadrantPolicy, SCALE_MIDPOINT,
};
