#![no_main]

use libfuzzer_sys::fuzz_target;

use folio::Slug;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // Any detail that parses must render without panicking
    if let Ok(detail) = serde_json::from_str::<folio::ProjectDetail>(content) {
        let record = folio::ContentRecord::new(Slug::featured(), "Fuzz", "Fuzz summary");
        let _ = folio::render_detail(&record, &detail);
    }
});
