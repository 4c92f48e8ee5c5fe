// BLE Keypad — Deep Sleep
//
// ext0 wake-up: a single RTC-capable pin at a given level restarts the chip
// from the reset vector. Digital pulls are lost in deep sleep, so the wake
// pin gets an RTC pull holding it away from the wake level.

use esp_idf_sys::{self as sys, esp};

use ble_keypad::config::Pin;
use ble_keypad::{Level, PowerControl, Pull};

pub struct DeepSleep;

impl PowerControl for DeepSleep {
    fn arm_wake_on_level(&mut self, pin: Pin, level: Level) -> anyhow::Result<()> {
        let gpio = pin as sys::gpio_num_t;
        let wake_level = match level {
            Level::High => 1,
            Level::Low => 0,
        };
        unsafe {
            esp!(sys::esp_sleep_enable_ext0_wakeup(gpio, wake_level))?;
            // Tie the pin to its inactive level for the whole sleep.
            match level.holding_pull() {
                Pull::Down => {
                    esp!(sys::rtc_gpio_pullup_dis(gpio))?;
                    esp!(sys::rtc_gpio_pulldown_en(gpio))?;
                }
                Pull::Up => {
                    esp!(sys::rtc_gpio_pulldown_dis(gpio))?;
                    esp!(sys::rtc_gpio_pullup_en(gpio))?;
                }
            }
        }
        log::info!("Wake-up armed on GPIO{} ({:?}, RTC pull {:?})", pin, level, level.holding_pull());
        Ok(())
    }

    /// Configure nothing further and enter deep sleep. Does not return.
    fn suspend_indefinitely(&mut self) -> ! {
        log::info!("Entering deep sleep");
        unsafe {
            sys::esp_deep_sleep_start();
        }
    }
}
