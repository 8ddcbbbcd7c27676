#![no_main]

use libfuzzer_sys::fuzz_target;
use nftlens::ancestor::common_ancestor_segments;
use nftlens::grouping::group_by_top_segment;
use nftlens::trace::TraceResult;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must not panic; a parsed trace must reduce without panicking
        if let Ok(trace) = TraceResult::from_json(input) {
            let _ = group_by_top_segment(&trace.file_list).counts();
            let _ = common_ancestor_segments(&trace.file_list, '/');
        }
    }
});
