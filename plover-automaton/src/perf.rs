// Quick release mode performance comparison
//
// Run with: cargo test --release -p plover-automaton scan_perf -- --ignored

#[cfg(test)]
mod perf_tests {
    use crate::Automaton;
    use std::time::Instant;

    #[test]
    #[ignore] // Run with: cargo test --release scan_perf -- --ignored
    fn scan_perf() {
        let patterns: Vec<String> = (0..1000).map(|i| format!("pattern_{}", i)).collect();
        let automaton = Automaton::new(patterns).unwrap();

        let text: String = (0..10_000)
            .map(|i| format!("pattern_{} filler ", i % 2000))
            .collect();

        // Warmup
        for _ in 0..10 {
            let _ = automaton.scan(&text);
        }

        let iterations = 100u32;
        let start = Instant::now();
        for _ in 0..iterations {
            let _ = automaton.scan(&text);
        }
        let linear = start.elapsed() / iterations;

        let start = Instant::now();
        let naive_report = automaton.scan_naive(&text);
        let naive = start.elapsed();

        let symbols = text.chars().count() as f64;
        println!("\n=== Release Mode Scan Performance ===");
        println!("Text length: {} symbols", symbols);
        println!("Linear scan: {:?}", linear);
        println!("Naive scan: {:?}", naive);
        println!(
            "Throughput: {:.2} M symbols/sec",
            symbols / linear.as_secs_f64() / 1_000_000.0
        );

        assert_eq!(automaton.scan(&text), naive_report);
    }
}
