use chrono::TimeZone;
use chrono_tz::Asia::Riyadh;

use salah_times::{Config, MoonAccuracy, Prayer, PrayerClock};

fn main() {
    let config = Config::builder()
        .location(24.494647, 39.770508)
        .time_zone(3.0)
        .method_name("Makkah")
        .asr_method_name("Shafii")
        .build();
    let clock = PrayerClock::new(config);

    let dt = Riyadh.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();
    let times = clock.times_at(&dt);
    let instant = dt.timestamp();
    let utc = times.to_utc().unwrap();

    println!("=== Prayer Time Calculation Example ===");
    println!(
        "Location: Medina ({:.4}°N, {:.4}°E)",
        config.latitude(),
        config.longitude()
    );
    println!("Date/Time: {}", dt);
    println!(
        "Method: {} / Asr: {}",
        config.method().name(),
        config.asr_method().name()
    );
    println!("Mode: {:?}", times.mode);
    println!();
    println!("--- Prayer Times ---");
    for prayer in Prayer::ALL {
        let local = utc[prayer as usize + 1].with_timezone(&Riyadh);
        println!("{:<8} {}", prayer.name(), local.format("%H:%M:%S"));
    }
    let midnight = utc[7].with_timezone(&Riyadh);
    println!("{:<8} {}", "Midnight", midnight.format("%Y-%m-%d %H:%M:%S"));
    println!();
    println!("--- Directions ---");
    match clock.qibla() {
        Ok(q) => println!("Qibla: {:.2}°", q),
        Err(err) => println!("Qibla: {}", err),
    }
    println!("Sun azimuth: {:.2}°", clock.sun_azimuth(Some(instant)));
    for level in 0..=3 {
        let accuracy = MoonAccuracy::from_level(level);
        println!(
            "Moon azimuth (accuracy {}): {:.2}°",
            level,
            salah_times::moon_azimuth(instant as f64, &config.location(), accuracy)
        );
    }
}
