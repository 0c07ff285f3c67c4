//! Load testing for the redirect server.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use urlshort::config::UrlshortConfig;
use urlshort::document::{PathMapping, RedirectEntry};

mod common;

#[tokio::test]
async fn test_load_performance() {
    // 1. Build a mapping with a spread of paths
    let mapping: PathMapping = (0..500)
        .map(|i| RedirectEntry::new(format!("/r/{i}"), format!("https://target.example/{i}")))
        .collect();

    // 2. Start server
    let (addr, shutdown) = common::start_server(UrlshortConfig::default(), mapping).await;

    // 3. Run load test: even requests hit a redirect, odd ones fall back
    let concurrency = 20;
    let requests_per_task = 50;
    let total_requests = concurrency * requests_per_task;

    let client = common::client();
    let start = Instant::now();

    let mut tasks = Vec::new();
    for task_id in 0..concurrency {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            let mut latencies = Vec::new();
            let mut redirects = 0usize;
            for n in 0..requests_per_task {
                let i = task_id * requests_per_task + n;
                let url = if i % 2 == 0 {
                    format!("http://{}/r/{}", addr, i % 500)
                } else {
                    format!("http://{}/miss/{}", addr, i)
                };
                let req_start = Instant::now();
                if let Ok(res) = client.get(&url).send().await {
                    match res.status() {
                        StatusCode::FOUND => {
                            redirects += 1;
                            latencies.push(req_start.elapsed());
                        }
                        StatusCode::OK => latencies.push(req_start.elapsed()),
                        _ => {}
                    }
                }
            }
            (latencies, redirects)
        }));
    }

    let mut all_latencies: Vec<Duration> = Vec::new();
    let mut total_redirects = 0;
    for task in tasks {
        let (latencies, redirects) = task.await.unwrap();
        all_latencies.extend(latencies);
        total_redirects += redirects;
    }

    let duration = start.elapsed();
    let rps = total_requests as f64 / duration.as_secs_f64();

    if all_latencies.is_empty() {
        panic!("No successful requests recorded");
    }
    assert!(total_redirects > 0 && total_redirects <= total_requests / 2);

    all_latencies.sort();
    let p50 = all_latencies[all_latencies.len() / 2];
    let p95 = all_latencies[(all_latencies.len() as f64 * 0.95) as usize];
    let p99 = all_latencies[(all_latencies.len() as f64 * 0.99) as usize];

    println!("\n--- Load Test Results ---");
    println!("Total Requests: {}", total_requests);
    println!("Concurrency:    {}", concurrency);
    println!("Total Duration: {:?}", duration);
    println!("Requests/sec:   {:.2}", rps);
    println!("P50 Latency:    {:?}", p50);
    println!("P95 Latency:    {:?}", p95);
    println!("P99 Latency:    {:?}", p99);
    println!("Redirects:      {}/{}", total_redirects, total_requests);
    println!("Success Rate:   {}/{}", all_latencies.len(), total_requests);
    println!("-------------------------\n");

    shutdown.trigger();
}
