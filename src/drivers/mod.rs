pub mod ble;
pub mod clock;
pub mod gpio;
pub mod sleep;
