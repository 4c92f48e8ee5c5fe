// BLE Keypad — Firmware Entry Point
//
// Boot sequence:
//   1. Configure every key line as an input (pull-up / pull-down by polarity).
//   2. Start the BLE HID keyboard and advertise.
//   3. Run the scan loop forever.
//
// The system enters deep sleep when no host has been connected for 10
// seconds; pressing the indicator key (GPIO2, active-high) wakes it, and
// execution restarts here from scratch.

#[cfg(target_os = "espidf")]
mod drivers;

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use ble_keypad::config::*;
    use ble_keypad::{scanner, Scanner};

    use crate::drivers::ble::BleKeyboard;
    use crate::drivers::clock::SystemClock;
    use crate::drivers::gpio::GpioLines;
    use crate::drivers::sleep::DeepSleep;

    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("Starting BLE keypad…");

    // ---- Key lines ---------------------------------------------------------
    let scanner = Scanner::new(KEYMAP, Timing::default())?;
    let mut lines = GpioLines;
    scanner.init(&mut lines)?;

    // ---- Transport ---------------------------------------------------------
    let mut keyboard = BleKeyboard::new(BLE_DEVICE_NAME, BLE_MANUFACTURER, BLE_BATTERY_LEVEL)?;

    log::info!("Boot complete, scanning {} keys", KEY_COUNT);
    scanner::run(scanner, &mut lines, &mut keyboard, &mut DeepSleep, &mut SystemClock)
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("ble-keypad firmware only runs on ESP-IDF targets; the host build is for tests.");
}
