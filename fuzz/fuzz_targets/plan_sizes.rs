#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use splitrs::{ChunkPlan, SizingDirective, split_bytes};

fuzz_target!(|data: Vec<u8>| {
    let input_size = data.len() as u64;
    let input = Bytes::from(data);

    let mut directives = vec![
        SizingDirective::ByCount(1),
        SizingDirective::ByCount(2),
        SizingDirective::ByCount(3),
        SizingDirective::ByCount(7),
        SizingDirective::ByCount(64),
        SizingDirective::ByMaxSize(1),
        SizingDirective::ByMaxSize(2),
        SizingDirective::ByMaxSize(4096),
        SizingDirective::ByMaxSize(u64::MAX),
    ];
    // Derive one directive from the data itself
    if input_size > 0 {
        directives.push(SizingDirective::ByCount(input_size));
        directives.push(SizingDirective::ByMaxSize(input_size));
    }

    for directive in directives {
        let plan = ChunkPlan::for_input(input_size, directive).unwrap();

        // Verify: a Chunked plan accounts for the input exactly and never
        // plans an empty trailing chunk
        if let ChunkPlan::Chunked {
            normal_count,
            normal_size,
            last_size,
        } = plan
        {
            assert_eq!(normal_count * normal_size + last_size, input_size);
            assert!(last_size >= 1);
            assert!(last_size <= normal_size);
            if let SizingDirective::ByMaxSize(s) = directive {
                assert!(normal_size <= s);
            }
        }

        let chunks = split_bytes(input.clone(), &plan);
        assert_eq!(chunks.len() as u64, plan.chunk_count());

        // Verify: indices are 1..=n in order
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index(), i as u64 + 1);
        }

        // Verify: no empty chunk unless the input itself is empty
        if input_size > 0 {
            for chunk in &chunks {
                assert!(!chunk.is_empty());
            }
        }

        // Verify: concatenating the chunks reproduces the input
        let combined: Vec<u8> = chunks
            .iter()
            .flat_map(|c| c.data().as_ref().to_vec())
            .collect();
        assert_eq!(combined, input.as_ref());
    }

    // Verify: zero directives are rejected, never a panic
    assert!(ChunkPlan::for_input(input_size, SizingDirective::ByCount(0)).is_err());
    assert!(ChunkPlan::for_input(input_size, SizingDirective::ByMaxSize(0)).is_err());
});
