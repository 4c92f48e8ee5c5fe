// BLE Keypad — Tick Clock

use esp_idf_hal::delay::FreeRtos;

use ble_keypad::Clock;

pub struct SystemClock;

impl Clock for SystemClock {
    /// Milliseconds since boot (wraps at ~49 days, compare with wrapping_sub).
    fn now_ms(&self) -> u32 {
        unsafe { (esp_idf_sys::esp_timer_get_time() / 1000) as u32 }
    }

    fn delay_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }
}
