#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(location) = std::str::from_utf8(data) {
        // Route and slug parsing take untrusted locations - never panic
        let route = folio::Route::parse(location);
        let _ = route.href("/", true);
        let _ = route.output_path();
        let _ = folio::Slug::parse(location);
    }
});
