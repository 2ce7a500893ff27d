#![no_main]

use libfuzzer_sys::fuzz_target;

use cstr_profit::config::ScenarioConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = ScenarioConfig::from_toml_str(text) else {
        return;
    };
    // Errors are fine; panics are not.
    let _ = config.scenario().optimize();
});
