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

use av_client::{AlphaVantageClient, Config, Error};
use av_core::Dataset;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AlphaVantageClient {
  let config =
    Config::default_with_key("test_key".to_string()).with_base_url(format!("{}/query", server.uri()));
  AlphaVantageClient::new(config).expect("client")
}

#[tokio::test]
async fn overview_is_returned_verbatim() {
  let server = MockServer::start().await;
  let body = json!({"Symbol": "IBM", "MarketCapitalization": "2500000000", "Extra": [1, 2]});

  Mock::given(method("GET"))
    .and(path("/query"))
    .and(query_param("function", "OVERVIEW"))
    .and(query_param("symbol", "IBM"))
    .and(query_param("apikey", "test_key"))
    .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let overview = client_for(&server).fundamentals().company_overview("IBM").await.unwrap();
  assert_eq!(overview, body);
}

#[tokio::test]
async fn earnings_calendar_csv_becomes_rows() {
  let server = MockServer::start().await;
  let csv = "symbol,name,reportDate,fiscalDateEnding,estimate,currency\r\n\
             IBM,International Business Machines,2025-01-22,2024-12-31,3.78,USD\r\n";

  Mock::given(method("GET"))
    .and(query_param("function", "EARNINGS_CALENDAR"))
    .and(query_param("horizon", "12month"))
    .respond_with(ResponseTemplate::new(200).set_body_string(csv))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let rows = client.fundamentals().earnings_calendar("IBM", "12month").await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["reportDate"], "2025-01-22");

  let value =
    client.fundamentals().fetch_dataset(Dataset::EarningsCalendar, "IBM", "12month").await.unwrap();
  assert_eq!(value[0]["estimate"], "3.78");
}

#[tokio::test]
async fn rate_limit_note_is_an_error() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."
    })))
    .mount(&server)
    .await;

  let result = client_for(&server).fundamentals().income_statement("IBM").await;
  assert!(matches!(result, Err(Error::RateLimit(_))));
}

#[tokio::test]
async fn calendar_json_notice_is_reported() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "Error Message": "the parameter apikey is invalid or missing."
    })))
    .mount(&server)
    .await;

  let result = client_for(&server).fundamentals().earnings_calendar("IBM", "12month").await;
  assert!(matches!(result, Err(Error::ApiKey(_))));
}

#[tokio::test]
async fn server_error_surfaces_as_http_error() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(500))
    .expect(1)
    .mount(&server)
    .await;

  let result = client_for(&server).fundamentals().dividends("IBM").await;
  assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn fetch_dataset_calls_the_mapped_function() {
  let server = MockServer::start().await;
  let functions = [
    (Dataset::Overview, "OVERVIEW"),
    (Dataset::IncomeStatement, "INCOME_STATEMENT"),
    (Dataset::BalanceSheet, "BALANCE_SHEET"),
    (Dataset::CashFlows, "CASH_FLOW"),
    (Dataset::EarningsHistory, "EARNINGS"),
    (Dataset::EarningsEstimates, "EARNINGS_ESTIMATES"),
    (Dataset::Dividends, "DIVIDENDS"),
  ];

  for (_, function) in functions {
    Mock::given(method("GET"))
      .and(query_param("function", function))
      .and(query_param("symbol", "IBM"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"served": function})))
      .expect(1)
      .mount(&server)
      .await;
  }

  let client = client_for(&server);
  for (dataset, function) in functions {
    let value = client.fundamentals().fetch_dataset(dataset, "IBM", "12month").await.unwrap();
    assert_eq!(value["served"], function, "{dataset} hit the wrong function");
  }
}

#[tokio::test]
async fn calendar_rows_keep_column_order_and_ragged_lines() {
  let server = MockServer::start().await;
  let csv = "symbol,name,reportDate,fiscalDateEnding,estimate,currency\r\n\
             IBM,International Business Machines,2025-01-22,2024-12-31,3.78,USD\r\n\
             IBM,International Business Machines,2025-04-23\r\n";

  Mock::given(method("GET"))
    .and(query_param("function", "EARNINGS_CALENDAR"))
    .respond_with(ResponseTemplate::new(200).set_body_string(csv))
    .mount(&server)
    .await;

  let value = client_for(&server)
    .fundamentals()
    .fetch_dataset(Dataset::EarningsCalendar, "IBM", "12month")
    .await
    .unwrap();

  let text = serde_json::to_string(&value[0]).unwrap();
  assert!(text.starts_with(r#"{"symbol":"IBM","name":"#));
  assert!(text.find("reportDate").unwrap() < text.find("estimate").unwrap());

  assert_eq!(value[1]["reportDate"], "2025-04-23");
  assert!(value[1]["estimate"].is_null());
}
