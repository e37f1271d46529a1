use watchface::logging::init_logging;
use watchface::{TimeOfDay, Watch, WatchConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(Some("debug"));

    // A static face at the classic showroom time.
    let config = WatchConfig::builder()
        .title("Frozen".to_string())
        .preferred_size(360)
        .frozen_at(TimeOfDay::from_hms(10, 10, 30))
        .build();

    println!("Displaying a static watch face at {}", TimeOfDay::from_hms(10, 10, 30));
    println!("Close the window to exit");

    Watch::new(config).show()?;
    Ok(())
}
