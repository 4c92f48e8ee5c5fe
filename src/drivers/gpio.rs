// BLE Keypad — Key Line GPIO Driver
//
// Direct ESP-IDF GPIO calls rather than typed `PinDriver`s: the indicator
// line flips between input and output at runtime, and the pins come from a
// table rather than named peripherals.

use esp_idf_sys::{self as sys, esp};

use ble_keypad::config::Pin;
use ble_keypad::{Level, LineIo, Polarity, Pull};

pub struct GpioLines;

impl LineIo for GpioLines {
    fn configure_input(&mut self, pin: Pin, polarity: Polarity) -> anyhow::Result<()> {
        // Pull toward the released level: active-low keys idle high.
        let pull = match polarity.active_level().holding_pull() {
            Pull::Up => sys::gpio_pull_mode_t_GPIO_PULLUP_ONLY,
            Pull::Down => sys::gpio_pull_mode_t_GPIO_PULLDOWN_ONLY,
        };
        let gpio = pin as sys::gpio_num_t;
        unsafe {
            esp!(sys::gpio_reset_pin(gpio))?;
            esp!(sys::gpio_set_direction(gpio, sys::gpio_mode_t_GPIO_MODE_INPUT))?;
            esp!(sys::gpio_set_pull_mode(gpio, pull))?;
        }
        Ok(())
    }

    fn configure_output(&mut self, pin: Pin) -> anyhow::Result<()> {
        let gpio = pin as sys::gpio_num_t;
        unsafe {
            esp!(sys::gpio_set_pull_mode(gpio, sys::gpio_pull_mode_t_GPIO_FLOATING))?;
            esp!(sys::gpio_set_direction(gpio, sys::gpio_mode_t_GPIO_MODE_OUTPUT))?;
        }
        Ok(())
    }

    fn read_raw(&self, pin: Pin) -> Level {
        if unsafe { sys::gpio_get_level(pin as sys::gpio_num_t) } != 0 {
            Level::High
        } else {
            Level::Low
        }
    }

    fn write_raw(&mut self, pin: Pin, level: Level) -> anyhow::Result<()> {
        let value = match level {
            Level::High => 1,
            Level::Low => 0,
        };
        esp!(unsafe { sys::gpio_set_level(pin as sys::gpio_num_t, value) })?;
        Ok(())
    }
}
