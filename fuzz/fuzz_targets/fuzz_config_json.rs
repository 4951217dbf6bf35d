#![no_main]

use heartboard::config::AppConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary JSON must either be rejected or yield settings that validate
    // cleanly or fail with an error, never a panic
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(config) = serde_json::from_str::<AppConfig>(s)
    {
        let _ = config.screen.validate();
    }
});
