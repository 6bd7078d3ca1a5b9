#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use blink_core::status_code;
use blink_led::blinker::{blink_task, user_init};
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use esp_println::println;
use panic_rtt_target as _;

esp_bootloader_esp_idf::esp_app_desc!();

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    rtt_target::rtt_init_defmt!();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    println!("Embassy initialized!");

    let init = user_init(peripherals.GPIO2);
    info!("user_init status: {}", status_code(&init));

    match init {
        Ok(driver) => {
            println!("Starting LED blink...");
            spawner.spawn(blink_task(driver).expect("blink task already spawned"));
        }
        Err(e) => {
            error!("Blink initialization failed: {}", e);
            panic!("blink initialization failed");
        }
    }

    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
