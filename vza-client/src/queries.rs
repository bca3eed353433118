//! Typed fetches for the three backend row sets.

use log::info;

use crate::error::Result;
use crate::rest::{RestClient, SortOrder};
use vza_model::reading::HourlyReading;
use vza_model::station::{Station, StationDescription};

/// All rows of the station overview view. The list is unordered on the
/// wire; grouping and sorting happen client side.
pub async fn fetch_stations(client: &RestClient) -> Result<Vec<Station>> {
    let rows: Vec<Station> = client.table("gauging_stations_v").fetch().await?;
    info!("fetched {} stations from gauging_stations_v", rows.len());
    Ok(rows)
}

/// Every hourly reading for one station, newest first.
pub async fn fetch_hourly(client: &RestClient, station_id: &str) -> Result<Vec<HourlyReading>> {
    let rows: Vec<HourlyReading> = client
        .table("hourly_data")
        .eq("gauging_station_id", station_id)
        .order("measure_date", SortOrder::Descending)
        .fetch()
        .await?;
    info!("fetched {} hourly readings for {}", rows.len(), station_id);
    Ok(rows)
}

/// Descriptive facts for one station, ordered by id.
pub async fn fetch_descriptions(
    client: &RestClient,
    gauging_station: &str,
    waterflow: &str,
) -> Result<Vec<StationDescription>> {
    let rows: Vec<StationDescription> = client
        .table("gauging_station_desc")
        .eq("gauging_station", gauging_station)
        .eq("waterflow", waterflow)
        .order("id", SortOrder::Ascending)
        .fetch()
        .await?;
    info!(
        "fetched {} description rows for {} ({})",
        rows.len(),
        gauging_station,
        waterflow
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::fetch_hourly;
    use crate::config::ClientConfig;
    use crate::rest::RestClient;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::time::Duration;

    // Same harness as the rest module tests: one canned response, with the
    // request head captured so the emitted filters can be checked.
    fn one_shot_server(body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (sender, receiver) = mpsc::channel();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    match stream.read(&mut buf) {
                        Ok(0) => break,
                        Ok(n) => {
                            head.extend_from_slice(&buf[..n]);
                            if head.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
                let _ = sender.send(String::from_utf8_lossy(&head).into_owned());
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        (format!("http://{addr}"), receiver)
    }

    #[tokio::test]
    async fn hourly_query_filters_and_orders() {
        let (base_url, request) = one_shot_server("[]");
        let client = RestClient::new(ClientConfig::new(base_url, "key")).unwrap();

        let rows = fetch_hourly(&client, "Budapest-Duna").await.unwrap();
        assert!(rows.is_empty());

        let head = request.recv_timeout(Duration::from_secs(5)).unwrap();
        let request_line = head.lines().next().unwrap();
        assert!(request_line.contains("/rest/v1/hourly_data"));
        assert!(request_line.contains("gauging_station_id=eq.Budapest-Duna"));
        assert!(request_line.contains("order=measure_date.desc"));
    }
}
