/// Sets up the `log` backend for the current platform. Safe to call twice.
pub fn init_logging() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("reunite"),
    );

    #[cfg(not(target_os = "android"))]
    {
        let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format(|buf, record| {
                use std::io::Write;
                writeln!(
                    buf,
                    "[{}] {} [{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .try_init();
        if result.is_err() {
            log::debug!("Logger already initialised");
        }
    }
}
