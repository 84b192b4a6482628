#![allow(clippy::unwrap_used, reason = "tests can panic on unwrap")]

use httpmock::MockServer;
use odds_api_client::odds::{Client, Config};

const API_KEY: &str = "test-api-key";

fn client(server: &MockServer) -> anyhow::Result<Client> {
    Ok(Client::with_config(
        &server.base_url(),
        API_KEY,
        Config::default(),
    )?)
}

mod sports {
    use httpmock::{Method::GET, MockServer};
    use odds_api_client::odds::types::request::SportsRequest;
    use odds_api_client::odds::types::response::Sport;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::{API_KEY, client};

    #[tokio::test]
    async fn sports_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/sports/")
                .query_param("apiKey", API_KEY)
                .query_param_missing("all");
            then.status(StatusCode::OK).json_body(json!([
                {
                    "key": "americanfootball_nfl",
                    "group": "American Football",
                    "title": "NFL",
                    "description": "US Football",
                    "active": true,
                    "has_outrights": false
                },
                {
                    "key": "basketball_nba",
                    "group": "Basketball",
                    "title": "NBA",
                    "description": "US Basketball",
                    "active": true,
                    "has_outrights": false
                }
            ]));
        });

        let response = client.sports(&SportsRequest::default()).await?.unwrap();

        let expected = Sport::builder()
            .key("americanfootball_nfl")
            .group("American Football")
            .title("NFL")
            .description("US Football")
            .active(true)
            .has_outrights(false)
            .build();

        assert_eq!(response.len(), 2);
        assert_eq!(response[0], expected);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn sports_all_should_send_flag() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/sports/")
                .query_param("all", "true")
                .query_param("apiKey", API_KEY);
            then.status(StatusCode::OK).json_body(json!([]));
        });

        let request = SportsRequest::builder().all(true).build();
        let response = client.sports(&request).await?;

        assert_eq!(response, Some(Vec::new()));
        mock.assert();

        Ok(())
    }
}

mod odds {
    use httpmock::{Method::GET, MockServer};
    use odds_api_client::odds::types::request::OddsRequest;
    use odds_api_client::odds::types::{OddsFormat, Region};
    use odds_api_client::types::dec;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::{API_KEY, client};

    #[tokio::test]
    async fn odds_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/sports/basketball_nba/odds")
                .query_param("regions", "us,uk")
                .query_param("markets", "h2h,spreads")
                .query_param("bookmakers", "fanduel")
                .query_param("oddsFormat", "american")
                .query_param("apiKey", API_KEY);
            then.status(StatusCode::OK).json_body(json!([
                {
                    "id": "bda33adca828c09dc3cac3a856aef176",
                    "sport_key": "basketball_nba",
                    "sport_title": "NBA",
                    "commence_time": "2023-02-16T00:10:00Z",
                    "home_team": "Boston Celtics",
                    "away_team": "Detroit Pistons",
                    "bookmakers": [{
                        "key": "fanduel",
                        "title": "FanDuel",
                        "last_update": "2023-02-15T20:30:05Z",
                        "markets": [
                            {
                                "key": "h2h",
                                "last_update": "2023-02-15T20:30:05Z",
                                "outcomes": [
                                    { "name": "Boston Celtics", "price": -1400 },
                                    { "name": "Detroit Pistons", "price": 800 }
                                ]
                            },
                            {
                                "key": "spreads",
                                "last_update": "2023-02-15T20:30:05Z",
                                "outcomes": [
                                    { "name": "Boston Celtics", "price": -110, "point": -13.5 },
                                    { "name": "Detroit Pistons", "price": -110, "point": 13.5 }
                                ]
                            }
                        ]
                    }]
                }
            ]));
        });

        let request = OddsRequest::builder()
            .sport("basketball_nba")
            .regions(vec![Region::Us, Region::Uk])
            .markets(vec!["h2h".to_owned(), "spreads".to_owned()])
            .bookmakers(vec!["fanduel".to_owned()])
            .odds_format(OddsFormat::American)
            .build();

        let events = client.odds(&request).await?.unwrap();

        assert_eq!(events.len(), 1);
        let fanduel = &events[0].bookmakers[0];
        assert_eq!(fanduel.key, "fanduel");
        assert_eq!(fanduel.markets[0].outcomes[0].price, dec!(-1400));
        assert_eq!(fanduel.markets[1].outcomes[1].point, Some(dec!(13.5)));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn odds_should_keep_prices_exact() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/v4/sports/soccer_epl/odds");
            then.status(StatusCode::OK).json_body(json!([
                {
                    "id": "e1",
                    "sport_key": "soccer_epl",
                    "commence_time": 1_676_505_600,
                    "home_team": "Arsenal",
                    "away_team": "Chelsea",
                    "bookmakers": [{
                        "key": "betfair_ex_uk",
                        "title": "Betfair",
                        "markets": [{
                            "key": "h2h",
                            "outcomes": [
                                { "name": "Arsenal", "price": 1.91 },
                                { "name": "Chelsea", "price": 4.2 },
                                { "name": "Draw", "price": 3.75 }
                            ]
                        }]
                    }]
                }
            ]));
        });

        let request = OddsRequest::builder()
            .sport("soccer_epl")
            .regions(vec![Region::Uk])
            .markets(vec!["h2h".to_owned()])
            .build();

        let events = client.odds(&request).await?.unwrap();

        let prices: Vec<_> = events[0].bookmakers[0].markets[0]
            .outcomes
            .iter()
            .map(|o| o.price)
            .collect();
        assert_eq!(prices, [dec!(1.91), dec!(4.2), dec!(3.75)]);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn odds_should_send_regions_outside_the_enum() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/sports/soccer_epl/odds")
                .query_param("regions", "eu,fr,se")
                .query_param("apiKey", API_KEY);
            then.status(StatusCode::OK).json_body(json!([]));
        });

        let request = OddsRequest::builder()
            .sport("soccer_epl")
            .regions(vec![Region::Eu, Region::from("fr"), "se".into()])
            .markets(vec!["h2h".to_owned()])
            .build();

        assert_eq!(client.odds(&request).await?, Some(Vec::new()));
        mock.assert();

        Ok(())
    }
}

mod scores {
    use httpmock::{Method::GET, MockServer};
    use odds_api_client::odds::types::DateFormat;
    use odds_api_client::odds::types::request::ScoresRequest;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::{API_KEY, client};

    #[tokio::test]
    async fn scores_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/sports/basketball_nba/scores/")
                .query_param("daysFrom", "1")
                .query_param("dateFormat", "unix")
                .query_param("apiKey", API_KEY);
            then.status(StatusCode::OK).json_body(json!([
                {
                    "id": "4fe4ab4bb3cb2d32d2a9e5e7b3fe1ec3",
                    "sport_key": "basketball_nba",
                    "sport_title": "NBA",
                    "commence_time": 1_644_116_438,
                    "completed": true,
                    "home_team": "Phoenix Suns",
                    "away_team": "New Orleans Pelicans",
                    "scores": [
                        { "name": "Phoenix Suns", "score": "108" },
                        { "name": "New Orleans Pelicans", "score": 97 }
                    ],
                    "last_update": 1_644_125_000
                },
                {
                    "id": "572d984e132eddaac3da93e5db332e7e",
                    "sport_key": "basketball_nba",
                    "sport_title": "NBA",
                    "commence_time": 1_644_203_438,
                    "completed": false,
                    "home_team": "Sacramento Kings",
                    "away_team": "Oklahoma City Thunder",
                    "scores": null,
                    "last_update": null
                }
            ]));
        });

        let request = ScoresRequest::builder()
            .sport("basketball_nba")
            .days_from(1)
            .date_format(DateFormat::Unix)
            .build();

        let games = client.scores(&request).await?.unwrap();

        assert_eq!(games.len(), 2);
        assert!(games[0].completed);
        let scores = games[0].scores.as_ref().unwrap();
        assert_eq!(scores[0].score, "108");
        assert_eq!(scores[1].score, "97");
        assert!(games[1].scores.is_none());
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn days_from_should_be_left_to_the_provider() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/sports/basketball_nba/scores/")
                .query_param("daysFrom", "7")
                .query_param("apiKey", API_KEY);
            then.status(StatusCode::UNPROCESSABLE_ENTITY).json_body(json!({
                "message": "Invalid daysFrom parameter. Must be between 1 and 3",
                "error_code": "INVALID_SCORES_DAYS_FROM"
            }));
        });

        let request = ScoresRequest::builder()
            .sport("basketball_nba")
            .days_from(7)
            .build();

        assert!(client.scores(&request).await?.is_none());
        mock.assert();

        Ok(())
    }
}

mod historical_odds {
    use chrono::{TimeZone as _, Utc};
    use httpmock::{Method::GET, MockServer};
    use odds_api_client::odds::types::Region;
    use odds_api_client::odds::types::request::HistoricalOddsRequest;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::{API_KEY, client};

    #[tokio::test]
    async fn historical_odds_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/sports/americanfootball_nfl/odds-history/")
                .query_param("regions", "us")
                .query_param("markets", "h2h")
                .query_param("date", "2021-10-18T12:00:00Z")
                .query_param("apiKey", API_KEY);
            then.status(StatusCode::OK).json_body(json!({
                "timestamp": "2021-10-18T11:55:00Z",
                "previous_timestamp": "2021-10-18T11:45:00Z",
                "next_timestamp": "2021-10-18T12:05:00Z",
                "data": [{
                    "id": "4edd5ce3ea9c4f6f6f4ee8c3e0e29e3a",
                    "sport_key": "americanfootball_nfl",
                    "sport_title": "NFL",
                    "commence_time": "2021-10-19T00:15:00Z",
                    "home_team": "Seattle Seahawks",
                    "away_team": "Pittsburgh Steelers",
                    "bookmakers": []
                }]
            }));
        });

        let request = HistoricalOddsRequest::builder()
            .sport("americanfootball_nfl")
            .regions(vec![Region::Us])
            .markets(vec!["h2h".to_owned()])
            .date(Utc.with_ymd_and_hms(2021, 10, 18, 12, 0, 0).unwrap())
            .build();

        let snapshot = client.historical_odds(&request).await?.unwrap();

        assert_eq!(
            snapshot.timestamp,
            Utc.with_ymd_and_hms(2021, 10, 18, 11, 55, 0).unwrap()
        );
        assert!(snapshot.previous_timestamp.is_some());
        assert_eq!(snapshot.data.len(), 1);
        assert_eq!(snapshot.data[0].home_team.as_deref(), Some("Seattle Seahawks"));
        mock.assert();

        Ok(())
    }
}

mod event_odds {
    use httpmock::{Method::GET, MockServer};
    use odds_api_client::odds::types::Region;
    use odds_api_client::odds::types::request::{EventOddsRequest, OddsRequest};
    use reqwest::StatusCode;
    use serde_json::json;

    use super::{API_KEY, client};

    fn event(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "sport_key": "basketball_nba",
            "sport_title": "NBA",
            "commence_time": "2023-02-16T00:10:00Z",
            "home_team": "Boston Celtics",
            "away_team": "Detroit Pistons",
            "bookmakers": [{
                "key": "fanduel",
                "title": "FanDuel",
                "last_update": "2023-02-15T20:30:05Z",
                "markets": [{
                    "key": "h2h",
                    "last_update": "2023-02-15T20:30:05Z",
                    "outcomes": [
                        { "name": "Boston Celtics", "price": 1.07 },
                        { "name": "Detroit Pistons", "price": 9.0 }
                    ]
                }]
            }]
        })
    }

    #[tokio::test]
    async fn event_odds_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/sports/basketball_nba/events/bda33adca828c09dc3cac3a856aef176/odds/")
                .query_param("regions", "us")
                .query_param("markets", "player_points,player_rebounds")
                .query_param("apiKey", API_KEY);
            then.status(StatusCode::OK)
                .json_body(event("bda33adca828c09dc3cac3a856aef176"));
        });

        let request = EventOddsRequest::builder()
            .sport("basketball_nba")
            .event_id("bda33adca828c09dc3cac3a856aef176")
            .regions(vec![Region::Us])
            .markets(vec!["player_points".to_owned(), "player_rebounds".to_owned()])
            .build();

        let response = client.event_odds(&request).await?.unwrap();

        assert_eq!(response.id, "bda33adca828c09dc3cac3a856aef176");
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn odds_then_event_odds_should_return_same_event() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;
        let event_id = "4afb8f0ba6e00d9e44b4240d1ba5493c";

        let odds_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/sports/basketball_nba/odds")
                .query_param("regions", "us")
                .query_param("markets", "h2h")
                .query_param("bookmakers", "fanduel")
                .query_param("apiKey", API_KEY);
            then.status(StatusCode::OK)
                .json_body(json!([event(event_id), event("second-event")]));
        });
        let event_mock = server.mock(|when, then| {
            when.method(GET)
                .path(format!("/v4/sports/basketball_nba/events/{event_id}/odds/"))
                .query_param("regions", "us")
                .query_param("markets", "h2h")
                .query_param("bookmakers", "fanduel")
                .query_param("apiKey", API_KEY);
            then.status(StatusCode::OK).json_body(event(event_id));
        });

        let odds_request = OddsRequest::builder()
            .sport("basketball_nba")
            .regions(vec![Region::Us])
            .markets(vec!["h2h".to_owned()])
            .bookmakers(vec!["fanduel".to_owned()])
            .build();
        let events = client.odds(&odds_request).await?.unwrap();
        let first = events.first().unwrap();

        let event_request = EventOddsRequest::builder()
            .sport(first.sport_key.clone())
            .event_id(first.id.clone())
            .regions(vec![Region::Us])
            .markets(vec!["h2h".to_owned()])
            .bookmakers(vec!["fanduel".to_owned()])
            .build();
        let event = client.event_odds(&event_request).await?.unwrap();

        assert_eq!(event.id, first.id);
        odds_mock.assert();
        event_mock.assert();

        Ok(())
    }
}

mod usage {
    use httpmock::{Method::GET, MockServer};
    use odds_api_client::error::{InvalidHeader, Kind};
    use reqwest::StatusCode;
    use serde_json::json;

    use super::{API_KEY, client};

    #[tokio::test]
    async fn usage_should_read_headers() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v4/sports/")
                .query_param("apiKey", API_KEY);
            then.status(StatusCode::OK)
                .header("x-requests-remaining", "14527.0")
                .header("x-requests-used", "473")
                .header("x-requests-last", "0")
                .json_body(json!([]));
        });

        let usage = client.usage().await?.unwrap();

        assert_eq!(usage.remaining, 14527);
        assert_eq!(usage.used, 473);
        assert_eq!(usage.last, Some(0));
        mock.assert_calls(1);

        Ok(())
    }

    #[tokio::test]
    async fn requests_remaining_and_used_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/v4/sports/");
            then.status(StatusCode::OK)
                .header("x-requests-remaining", "500")
                .header("x-requests-used", "0")
                .json_body(json!([]));
        });

        assert_eq!(client.requests_remaining().await?, Some(500));
        assert_eq!(client.requests_used().await?, Some(0));
        mock.assert_calls(2);

        Ok(())
    }

    #[tokio::test]
    async fn usage_without_headers_should_fail() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/v4/sports/");
            then.status(StatusCode::OK).json_body(json!([]));
        });

        let error = client.usage().await.unwrap_err();

        assert_eq!(error.kind(), Kind::Internal);
        assert_eq!(
            error.downcast_ref::<InvalidHeader>().unwrap().name,
            "x-requests-remaining"
        );
        mock.assert();

        Ok(())
    }
}

mod unauthorized {
    use httpmock::MockServer;
    use odds_api_client::odds::types::Region;
    use odds_api_client::odds::types::request::{
        EventOddsRequest, HistoricalOddsRequest, OddsRequest, ScoresRequest, SportsRequest,
    };
    use odds_api_client::types::{DateTime, Utc};
    use reqwest::StatusCode;
    use serde_json::json;

    use super::client;

    #[tokio::test]
    async fn invalid_api_key_should_return_none_everywhere() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|_, then| {
            then.status(StatusCode::UNAUTHORIZED).json_body(json!({
                "message": "API key is not valid",
                "error_code": "INVALID_KEY"
            }));
        });

        let regions = vec![Region::Us];
        let markets = vec!["h2h".to_owned()];

        let sports = client.sports(&SportsRequest::default()).await?;
        let odds = client
            .odds(
                &OddsRequest::builder()
                    .sport("basketball_nba")
                    .regions(regions.clone())
                    .markets(markets.clone())
                    .build(),
            )
            .await?;
        let scores = client
            .scores(&ScoresRequest::builder().sport("basketball_nba").build())
            .await?;
        let historical = client
            .historical_odds(
                &HistoricalOddsRequest::builder()
                    .sport("basketball_nba")
                    .regions(regions.clone())
                    .markets(markets.clone())
                    .date(DateTime::<Utc>::UNIX_EPOCH)
                    .build(),
            )
            .await?;
        let event = client
            .event_odds(
                &EventOddsRequest::builder()
                    .sport("basketball_nba")
                    .event_id("e1")
                    .regions(regions)
                    .markets(markets)
                    .build(),
            )
            .await?;
        let usage = client.usage().await?;
        let remaining = client.requests_remaining().await?;
        let used = client.requests_used().await?;

        assert!(sports.is_none());
        assert!(odds.is_none());
        assert!(scores.is_none());
        assert!(historical.is_none());
        assert!(event.is_none());
        assert!(usage.is_none());
        assert!(remaining.is_none());
        assert!(used.is_none());
        mock.assert_calls(8);

        Ok(())
    }

    #[tokio::test]
    async fn server_error_should_return_none() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|_, then| {
            then.status(StatusCode::INTERNAL_SERVER_ERROR)
                .body("upstream unavailable");
        });

        assert!(client.sports(&SportsRequest::default()).await?.is_none());
        mock.assert();

        Ok(())
    }
}

mod malformed {
    use httpmock::{Method::GET, MockServer};
    use odds_api_client::error::Kind;
    use odds_api_client::odds::types::request::SportsRequest;
    use reqwest::StatusCode;

    use super::client;

    #[tokio::test]
    async fn non_json_body_should_fail() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/v4/sports/");
            then.status(StatusCode::OK).body("<html>maintenance</html>");
        });

        let error = client.sports(&SportsRequest::default()).await.unwrap_err();

        assert_eq!(error.kind(), Kind::Internal);
        mock.assert();

        Ok(())
    }
}

mod unreachable {
    use odds_api_client::odds::types::request::SportsRequest;
    use odds_api_client::odds::{Client, Config};

    use super::API_KEY;

    /// Nothing listens on the discard port, so the connection is refused.
    const CLOSED: &str = "http://127.0.0.1:9";

    #[tokio::test]
    async fn connection_refused_should_return_none() -> anyhow::Result<()> {
        let client = Client::with_config(CLOSED, API_KEY, Config::default())?;

        assert!(client.sports(&SportsRequest::default()).await?.is_none());
        assert!(client.usage().await?.is_none());
        assert!(client.requests_remaining().await?.is_none());

        Ok(())
    }
}

mod logging {
    use std::io;
    use std::sync::{Arc, Mutex};

    use httpmock::MockServer;
    use odds_api_client::odds::types::request::SportsRequest;
    use odds_api_client::odds::{Client, Config};
    use reqwest::StatusCode;
    use serde_json::json;
    use tracing::subscriber::DefaultGuard;
    use tracing_subscriber::fmt::MakeWriter;

    use super::{API_KEY, client};

    /// In-memory log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn install(&self) -> DefaultGuard {
            let subscriber = tracing_subscriber::fmt()
                .with_writer(self.clone())
                .with_ansi(false)
                .with_max_level(tracing::Level::WARN)
                .finish();

            tracing::subscriber::set_default(subscriber)
        }

        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'writer> MakeWriter<'writer> for Captured {
        type Writer = Captured;

        fn make_writer(&'writer self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn rejected_request_should_log_status_and_body() -> anyhow::Result<()> {
        let logs = Captured::default();
        let _guard = logs.install();

        let server = MockServer::start();
        let client = client(&server)?;
        let mock = server.mock(|_, then| {
            then.status(StatusCode::UNAUTHORIZED).json_body(json!({
                "message": "API key is not valid",
                "error_code": "INVALID_KEY"
            }));
        });

        assert!(client.sports(&SportsRequest::default()).await?.is_none());
        mock.assert();

        let logs = logs.contents();
        assert!(logs.contains("API request failed"), "{logs}");
        assert!(logs.contains("401"), "{logs}");
        assert!(logs.contains("API key is not valid"), "{logs}");
        assert!(logs.contains("/v4/sports/"), "{logs}");
        assert!(!logs.contains(API_KEY), "{logs}");

        Ok(())
    }

    #[tokio::test]
    async fn unsent_request_should_log_the_error() -> anyhow::Result<()> {
        let logs = Captured::default();
        let _guard = logs.install();

        let client = Client::with_config("http://127.0.0.1:9", API_KEY, Config::default())?;

        assert!(client.sports(&SportsRequest::default()).await?.is_none());

        let logs = logs.contents();
        assert!(logs.contains("API request could not be sent"), "{logs}");
        assert!(logs.contains("GET"), "{logs}");
        assert!(logs.contains("/v4/sports/"), "{logs}");
        assert!(!logs.contains(API_KEY), "{logs}");

        Ok(())
    }
}
