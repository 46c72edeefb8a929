pub mod config_load;
pub mod config_types;

pub use config_load::{parse_fixed_time, Config};
pub use config_types::{
    AnimationConfig, ClockConfig, LayoutConfig, OscConfig, VehicleConfig, WindowConfig,
};
