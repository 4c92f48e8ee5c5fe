// BLE Keypad — BLE HID Keyboard Transport
//
// A plain boot-style keyboard (report id 1, modifiers + 6 keys) over NimBLE.
// Each symbol is typed as a key-down report followed by an all-up report.

use std::sync::Arc;

use esp32_nimble::enums::{AuthReq, SecurityIOCap};
use esp32_nimble::utilities::mutex::Mutex;
use esp32_nimble::{BLEAdvertisementData, BLECharacteristic, BLEDevice, BLEHIDDevice, BLEServer};
use esp_idf_hal::delay::Ets;

use ble_keypad::hid::usage_for;
use ble_keypad::Transport;

const KEYBOARD_REPORT_ID: u8 = 1;
const APPEARANCE_KEYBOARD: u16 = 0x03C1;
// Gap between key-down and key-up so the host registers the stroke.
const KEY_STROKE_GAP_MS: u32 = 7;

#[rustfmt::skip]
const REPORT_MAP: &[u8] = &[
    0x05, 0x01,       // Usage Page (Generic Desktop)
    0x09, 0x06,       // Usage (Keyboard)
    0xA1, 0x01,       // Collection (Application)
    0x85, KEYBOARD_REPORT_ID,
    0x05, 0x07,       //   Usage Page (Key Codes)
    0x19, 0xE0,       //   Usage Minimum (224)
    0x29, 0xE7,       //   Usage Maximum (231)
    0x15, 0x00,       //   Logical Minimum (0)
    0x25, 0x01,       //   Logical Maximum (1)
    0x75, 0x01,       //   Report Size (1)
    0x95, 0x08,       //   Report Count (8)
    0x81, 0x02,       //   Input (Data, Variable, Absolute): modifiers
    0x95, 0x01,       //   Report Count (1)
    0x75, 0x08,       //   Report Size (8)
    0x81, 0x01,       //   Input (Constant): reserved byte
    0x95, 0x05,       //   Report Count (5)
    0x75, 0x01,       //   Report Size (1)
    0x05, 0x08,       //   Usage Page (LEDs)
    0x19, 0x01,       //   Usage Minimum (Num Lock)
    0x29, 0x05,       //   Usage Maximum (Kana)
    0x91, 0x02,       //   Output (Data, Variable, Absolute): LEDs
    0x95, 0x01,       //   Report Count (1)
    0x75, 0x03,       //   Report Size (3)
    0x91, 0x01,       //   Output (Constant): padding
    0x95, 0x06,       //   Report Count (6)
    0x75, 0x08,       //   Report Size (8)
    0x15, 0x00,       //   Logical Minimum (0)
    0x25, 0x65,       //   Logical Maximum (101)
    0x05, 0x07,       //   Usage Page (Key Codes)
    0x19, 0x00,       //   Usage Minimum (0)
    0x29, 0x65,       //   Usage Maximum (101)
    0x81, 0x00,       //   Input (Data, Array): key array
    0xC0,             // End Collection
];

pub struct BleKeyboard {
    server: &'static mut BLEServer,
    input_report: Arc<Mutex<BLECharacteristic>>,
}

impl BleKeyboard {
    /// Start the HID service and begin advertising.
    pub fn new(name: &str, manufacturer: &str, battery_level: u8) -> anyhow::Result<Self> {
        let device = BLEDevice::take();
        device
            .security()
            .set_auth(AuthReq::all())
            .set_io_cap(SecurityIOCap::NoInputNoOutput)
            .resolve_rpa();

        let server = device.get_server();
        let mut hid = BLEHIDDevice::new(server);

        let input_report = hid.input_report(KEYBOARD_REPORT_ID);
        // LED output report; the host writes to it, nothing reads it back.
        let _output_report = hid.output_report(KEYBOARD_REPORT_ID);

        hid.manufacturer(manufacturer);
        hid.pnp(0x02, 0x05ac, 0x820a, 0x0210);
        hid.hid_info(0x00, 0x01);
        hid.report_map(REPORT_MAP);
        hid.set_battery_level(battery_level);

        let advertising = device.get_advertising();
        advertising
            .lock()
            .scan_response(false)
            .set_data(
                BLEAdvertisementData::new()
                    .name(name)
                    .appearance(APPEARANCE_KEYBOARD)
                    .add_service_uuid(hid.hid_service().lock().uuid()),
            )
            .map_err(|e| anyhow::anyhow!("BLE advertisement data rejected: {:?}", e))?;
        advertising
            .lock()
            .start()
            .map_err(|e| anyhow::anyhow!("BLE advertising failed to start: {:?}", e))?;

        log::info!("BLE HID keyboard advertising as \"{}\"", name);
        Ok(Self { server, input_report })
    }

    fn send_report(&self, modifiers: u8, key: u8) {
        let report = [modifiers, 0, key, 0, 0, 0, 0, 0];
        self.input_report.lock().set_value(&report).notify();
        Ets::delay_ms(KEY_STROKE_GAP_MS);
    }
}

impl Transport for BleKeyboard {
    fn is_connected(&self) -> bool {
        self.server.connected_count() > 0
    }

    fn send_symbol(&mut self, symbol: char) -> anyhow::Result<()> {
        let (modifiers, key) =
            usage_for(symbol).ok_or_else(|| anyhow::anyhow!("no HID usage for {:?}", symbol))?;
        self.send_report(modifiers, key);
        self.send_report(0, 0);
        Ok(())
    }
}
