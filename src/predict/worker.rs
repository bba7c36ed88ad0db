//! Background prediction requests
//!
//! The dashboard must stay interactive while a prediction is in flight,
//! so each request runs on its own thread and reports back over an mpsc
//! channel. Outcomes carry the sequence number of the request that
//! produced them: when the user triggers a new prediction before the
//! prior one resolves, the older outcome arrives with a stale sequence
//! and is dropped instead of overwriting the newer result.

use std::sync::mpsc;
use std::thread;

use tracing::debug;

use crate::error::PlannerResult;
use crate::predict::PredictionClient;

/// Result of one prediction request, tagged with its sequence number
#[derive(Debug)]
pub struct PredictionOutcome {
    pub seq: u64,
    pub result: PlannerResult<f64>,
}

/// Runs prediction requests off the UI thread
pub struct PredictionWorker {
    client: PredictionClient,
    sender: mpsc::Sender<PredictionOutcome>,
    receiver: mpsc::Receiver<PredictionOutcome>,
    next_seq: u64,
    latest_seq: u64,
}

impl PredictionWorker {
    /// Create a worker around the given client
    pub fn new(client: PredictionClient) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            client,
            sender,
            receiver,
            next_seq: 0,
            latest_seq: 0,
        }
    }

    /// Start a prediction request in the background
    ///
    /// Supersedes any request still in flight: only the outcome matching
    /// the returned sequence number will ever be delivered by `poll`.
    pub fn request(&mut self, history: [f64; 6]) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest_seq = seq;

        let client = self.client.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = client.predict_next_month(&history);
            // The receiver may be gone if the session ended
            let _ = sender.send(PredictionOutcome { seq, result });
        });

        seq
    }

    /// Deliver the outcome of the most recent request, if it has arrived
    ///
    /// Non-blocking. Outcomes from superseded requests are silently
    /// discarded here.
    pub fn poll(&mut self) -> Option<PlannerResult<f64>> {
        while let Ok(outcome) = self.receiver.try_recv() {
            if outcome.seq == self.latest_seq {
                return Some(outcome.result);
            }
            debug!(
                seq = outcome.seq,
                latest = self.latest_seq,
                "dropping superseded prediction outcome"
            );
        }
        None
    }

    /// Whether any request has been issued yet
    pub fn has_requested(&self) -> bool {
        self.latest_seq > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::time::{Duration, Instant};

    /// Serve one canned prediction response, optionally delayed
    fn stub_server(predicted: f64, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                thread::sleep(delay);

                let body = format!("{{\"predictedExpense\": {}}}", predicted);
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}", addr)
    }

    fn poll_until(worker: &mut PredictionWorker, deadline: Duration) -> Option<PlannerResult<f64>> {
        let start = Instant::now();
        while start.elapsed() < deadline {
            if let Some(result) = worker.poll() {
                return Some(result);
            }
            thread::sleep(Duration::from_millis(10));
        }
        None
    }

    const HISTORY: [f64; 6] = [20000.0, 22000.0, 24000.0, 26000.0, 28000.0, 6500.0];

    #[test]
    fn test_single_request_resolves() {
        let url = stub_server(27500.0, Duration::ZERO);
        let mut worker = PredictionWorker::new(PredictionClient::new(&url));

        worker.request(HISTORY);
        let result = poll_until(&mut worker, Duration::from_secs(5)).expect("outcome");
        assert_eq!(result.unwrap(), 27500.0);
    }

    #[test]
    fn test_superseded_request_is_dropped() {
        // The first request resolves slowly; the second supersedes it.
        let slow_url = stub_server(111.0, Duration::from_millis(400));
        let fast_url = stub_server(222.0, Duration::ZERO);

        let mut worker = PredictionWorker::new(PredictionClient::new(&slow_url));
        worker.request(HISTORY);

        worker.client = PredictionClient::new(&fast_url);
        worker.request(HISTORY);

        let result = poll_until(&mut worker, Duration::from_secs(5)).expect("outcome");
        assert_eq!(result.unwrap(), 222.0);

        // Let the slow outcome arrive, then confirm it is filtered out
        thread::sleep(Duration::from_millis(600));
        assert!(worker.poll().is_none());
    }

    #[test]
    fn test_failure_outcome_delivered() {
        // Nothing is listening on this address
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let mut worker =
            PredictionWorker::new(PredictionClient::new(&format!("http://{}", addr)));

        worker.request(HISTORY);
        let result = poll_until(&mut worker, Duration::from_secs(5)).expect("outcome");
        assert!(result.unwrap_err().is_prediction_unavailable());
    }

    #[test]
    fn test_has_requested() {
        let url = stub_server(1.0, Duration::ZERO);
        let mut worker = PredictionWorker::new(PredictionClient::new(&url));
        assert!(!worker.has_requested());
        worker.request(HISTORY);
        assert!(worker.has_requested());
    }
}
