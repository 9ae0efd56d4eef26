/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use av_client::AlphaVantageClient;
use av_core::{Config, Ticker};
use av_pipeline::prelude::*;
use serde_json::{Value, json};
use std::path::Path;
use wiremock::matchers::{any, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CALENDAR_CSV: &str = "symbol,name,reportDate,fiscalDateEnding,estimate,currency\n\
IBM,International Business Machines,2025-01-22,2024-12-31,3.78,USD\n\
IBM,International Business Machines,2025-04-23,2025-03-31,1.42,USD\n";

fn client_for(server: &MockServer) -> AlphaVantageClient {
  let config =
    Config::default_with_key("test_key".to_string()).with_base_url(format!("{}/query", server.uri()));
  AlphaVantageClient::new(config).expect("client")
}

fn config_for(dir: &Path) -> PipelineConfig {
  PipelineConfig { data_dir: dir.to_path_buf(), show_progress: false, ..PipelineConfig::default() }
}

async fn mount(server: &MockServer, function: &str, body: Value) {
  Mock::given(method("GET"))
    .and(query_param("function", function))
    .and(query_param("symbol", "IBM"))
    .respond_with(ResponseTemplate::new(200).set_body_json(body))
    .expect(1)
    .mount(server)
    .await;
}

async fn mount_full_api(server: &MockServer) {
  mount(
    server,
    "OVERVIEW",
    json!({
      "Symbol": "IBM",
      "Name": "International Business Machines",
      "Exchange": "NYSE",
      "Sector": "TECHNOLOGY",
      "MarketCapitalization": "2500000000",
      "ProfitMargin": "0.1567",
      "PERatio": "22.4567",
      "EPS": "6.43",
      "DividendYield": "0.0312"
    }),
  )
  .await;
  mount(
    server,
    "INCOME_STATEMENT",
    json!({"symbol": "IBM", "annualReports": [{"fiscalDateEnding": "2024-12-31", "totalRevenue": "62753000000", "grossProfit": "35551000000"}]}),
  )
  .await;
  mount(server, "BALANCE_SHEET", json!({"symbol": "IBM", "annualReports": []})).await;
  mount(
    server,
    "CASH_FLOW",
    json!({"symbol": "IBM", "annualReports": [{"fiscalDateEnding": "2024-12-31", "operatingCashflow": "13445000000", "capitalExpenditures": "1685000000"}]}),
  )
  .await;
  mount(
    server,
    "EARNINGS",
    json!({"symbol": "IBM", "quarterlyEarnings": [{"fiscalDateEnding": "2024-12-31", "reportedEPS": "3.92", "estimatedEPS": "3.78", "surprise": "0.14", "surprisePercentage": "3.7037"}]}),
  )
  .await;
  mount(
    server,
    "EARNINGS_ESTIMATES",
    json!({"symbol": "IBM", "estimates": [{"date": "2025-03-31", "horizon": "next fiscal quarter", "eps_estimate_average": "1.42"}]}),
  )
  .await;
  mount(server, "DIVIDENDS", json!({"symbol": "IBM", "data": [{"ex_dividend_date": "2025-02-10", "amount": "1.67"}]})).await;

  Mock::given(method("GET"))
    .and(query_param("function", "EARNINGS_CALENDAR"))
    .and(query_param("horizon", "12month"))
    .respond_with(ResponseTemplate::new(200).set_body_string(CALENDAR_CSV))
    .expect(1)
    .mount(server)
    .await;
}

fn read_json(path: &Path) -> Value {
  serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn full_pipeline_writes_three_artifacts() {
  let server = MockServer::start().await;
  mount_full_api(&server).await;
  let dir = tempfile::tempdir().unwrap();

  let pipeline = Pipeline::standard(client_for(&server), config_for(dir.path()));
  let report = pipeline.run(&Ticker::new("ibm").unwrap()).await.unwrap();

  assert_eq!(report.stages.len(), 3);

  let raw_path = dir.path().join("IBM_raw_data.json");
  let raw_text = std::fs::read_to_string(&raw_path).unwrap();
  let positions: Vec<usize> = av_core::Dataset::ALL
    .iter()
    .map(|dataset| raw_text.find(&format!("\"{}\":", dataset.key())).unwrap())
    .collect();
  assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "raw keys out of fetch order");

  let raw = read_json(&raw_path);
  assert_eq!(raw["earnings_calendar"][1]["reportDate"], "2025-04-23");

  let extracted = read_json(&dir.path().join("IBM_extracted_data.json"));
  assert_eq!(extracted["financial_metrics"]["market_cap"], "2500000000");
  assert_eq!(extracted["balance_sheet"], json!({}));
  assert_eq!(extracted["cash_flow"]["free_cash_flow"], "11760000000");

  let formatted = read_json(&dir.path().join("IBM_formatted_data.json"));
  assert_eq!(formatted["financial_metrics"]["Market Cap"], "$2,500,000,000");
  assert_eq!(formatted["financial_metrics"]["Profit Margin"], "15.67%");
  assert_eq!(formatted["valuation_metrics"]["P/E Ratio"], "22.46");
  assert_eq!(formatted["per_share_metrics"]["EPS"], "$6.43");
  assert_eq!(formatted["per_share_metrics"]["Dividend Yield"], "3.12%");
  assert_eq!(formatted["balance_sheet"]["Total Assets"], "N/A");
  assert_eq!(formatted["income_statement"]["Revenue"], "$62,753,000,000");
  assert_eq!(formatted["cash_flow"]["Free Cash Flow"], "$11,760,000,000");
  assert_eq!(formatted["earnings"]["Quarterly Earnings"][0]["Surprise %"], "3.70%");
  assert_eq!(formatted["earnings"]["Upcoming Earnings"][0]["EPS Estimate"], "$3.78");
  assert_eq!(formatted["earnings"]["Analyst Estimates"][0]["Horizon"], "next fiscal quarter");
  assert_eq!(formatted["corporate_actions"]["Dividends"][0]["Payment Date"], "N/A");
}

#[tokio::test]
async fn fetch_failure_leaves_later_artifacts_untouched() {
  let server = MockServer::start().await;
  Mock::given(any()).respond_with(ResponseTemplate::new(500)).mount(&server).await;
  let dir = tempfile::tempdir().unwrap();

  let sentinel = dir.path().join("IBM_extracted_data.json");
  std::fs::write(&sentinel, "{\"sentinel\": true}").unwrap();

  let pipeline = Pipeline::standard(client_for(&server), config_for(dir.path()));
  let err = pipeline.run(&Ticker::new("IBM").unwrap()).await.unwrap_err();

  match err {
    PipelineError::Stage { stage, .. } => assert_eq!(stage, "fetch"),
    other => panic!("unexpected error: {other}"),
  }
  assert_eq!(std::fs::read_to_string(&sentinel).unwrap(), "{\"sentinel\": true}");
  assert!(!dir.path().join("IBM_raw_data.json").exists());
  assert!(!dir.path().join("IBM_formatted_data.json").exists());
}

#[tokio::test]
async fn stages_can_run_individually() {
  let server = MockServer::start().await;
  mount_full_api(&server).await;
  let dir = tempfile::tempdir().unwrap();
  let ticker = Ticker::new("IBM").unwrap();
  let store = DataStore::new(dir.path());

  let extract = ExtractStage::new(store.clone());
  assert!(matches!(extract.run(&ticker).await, Err(PipelineError::MissingInput { .. })));

  FetchStage::new(client_for(&server), store.clone(), config_for(dir.path())).run(&ticker).await.unwrap();
  extract.run(&ticker).await.unwrap();
  let formatted = FormatStage::new(store).format_all(&ticker).await.unwrap();

  assert_eq!(formatted.company_info.exchange, "NYSE");
  assert_eq!(formatted.company_info.industry, "N/A");
}

#[tokio::test]
async fn concurrent_fetch_keeps_dataset_order() {
  let server = MockServer::start().await;
  mount_full_api(&server).await;
  let dir = tempfile::tempdir().unwrap();
  let config = PipelineConfig { max_concurrent_requests: 4, ..config_for(dir.path()) };

  let stage = FetchStage::new(client_for(&server), DataStore::new(dir.path()), config);
  let outcome = stage.fetch_all(&Ticker::new("IBM").unwrap()).await.unwrap();

  assert!(outcome.report.is_complete());
  let order: Vec<_> = outcome.raw.datasets().collect();
  assert_eq!(order, av_core::Dataset::ALL.to_vec());
}
