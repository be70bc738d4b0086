//! Raw response → domain type mapping.

use super::models::{Critic, CriticStatus, Link, Multimedia, Review};
use crate::api::types::{RawCritic, RawLink, RawMultimedia, RawReview};
use crate::error::NytError;
use crate::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse an upstream timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` (taken as UTC) and bare dates
/// (midnight UTC). Anything else is rejected.
pub fn parse_datetime(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed.and_utc());
        }
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = parsed.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(NytError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Parse an upstream calendar date, keeping the date as written.
///
/// Timestamps with an offset keep their local date and are not shifted to UTC.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.date_naive());
    }
    // Remaining formats carry no offset, so their UTC date is the written one.
    parse_datetime(field, value).map(|parsed| parsed.date_naive())
}

fn is_pick(raw: Option<&serde_json::Value>) -> bool {
    raw.and_then(serde_json::Value::as_i64) == Some(1)
}

fn link(raw: RawLink) -> Link {
    Link {
        suggested_link_text: raw.suggested_link_text,
        link_type: raw.link_type,
        url: raw.url,
    }
}

fn multimedia(raw: RawMultimedia) -> Multimedia {
    Multimedia {
        media_type: raw.media_type,
        height: raw.height,
        width: raw.width,
        src: raw.src,
    }
}

pub fn review(raw: RawReview) -> Result<Review> {
    Ok(Review {
        critics_pick: is_pick(raw.critics_pick.as_ref()),
        date_updated: parse_datetime("date_updated", &raw.date_updated)?,
        opening_date: raw
            .opening_date
            .as_deref()
            .map(|value| parse_date("opening_date", value))
            .transpose()?,
        publication_date: parse_date("publication_date", &raw.publication_date)?,
        byline: raw.byline,
        display_title: raw.display_title,
        headline: raw.headline,
        mpaa_rating: raw.mpaa_rating,
        summary_short: raw.summary_short,
        link: link(raw.link),
        multimedia: multimedia(raw.multimedia),
    })
}

pub fn reviews(raw: Vec<RawReview>) -> Result<Vec<Review>> {
    raw.into_iter().map(review).collect()
}

pub fn critic(raw: RawCritic) -> Critic {
    Critic {
        status: CriticStatus::from_raw(raw.status.as_deref()),
        display_name: raw.display_name,
        sort_name: raw.sort_name,
        bio: raw.bio,
        seo_name: raw.seo_name,
        multimedia: raw.multimedia.map(|nested| multimedia(nested.resource)),
    }
}

pub fn critics(raw: Vec<RawCritic>) -> Vec<Critic> {
    raw.into_iter().map(critic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};
    use serde_json::json;

    fn raw_review(overrides: serde_json::Value) -> RawReview {
        let mut value = json!({
            "display_title": "Parasite",
            "mpaa_rating": "R",
            "critics_pick": 1,
            "byline": "A.O. Scott",
            "headline": "‘Parasite’ Review: A Family Scheme Goes Too Far",
            "summary_short": "Bong Joon Ho’s class satire is a thriller.",
            "publication_date": "2019-10-10",
            "opening_date": "2019-10-11",
            "date_updated": "2019-10-11 12:04:02",
            "link": {
                "type": "article",
                "url": "https://www.nytimes.com/2019/10/10/movies/parasite-review.html",
                "suggested_link_text": "Read the New York Times Review of Parasite"
            },
            "multimedia": {
                "type": "mediumThreeByTwo210",
                "src": "https://static01.nyt.com/images/parasite.jpg",
                "height": 140,
                "width": 210
            }
        });
        if let (Some(base), Some(extra)) = (value.as_object_mut(), overrides.as_object()) {
            for (key, v) in extra {
                base.insert(key.clone(), v.clone());
            }
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_review_field_mapping() {
        let review = review(raw_review(json!({}))).unwrap();

        assert_eq!(review.display_title, "Parasite");
        assert_eq!(review.mpaa_rating, "R");
        assert!(review.critics_pick);
        assert_eq!(review.byline, "A.O. Scott");
        assert_eq!(review.summary_short, "Bong Joon Ho’s class satire is a thriller.");
        assert_eq!(
            review.publication_date,
            NaiveDate::from_ymd_opt(2019, 10, 10).unwrap()
        );
        assert_eq!(
            review.opening_date,
            Some(NaiveDate::from_ymd_opt(2019, 10, 11).unwrap())
        );
        assert_eq!(
            review.date_updated,
            Utc.with_ymd_and_hms(2019, 10, 11, 12, 4, 2).unwrap()
        );
        assert_eq!(review.link.link_type, "article");
        assert_eq!(
            review.link.suggested_link_text,
            "Read the New York Times Review of Parasite"
        );
        assert_eq!(review.multimedia.media_type, "mediumThreeByTwo210");
        assert_eq!(review.multimedia.height, 140);
        assert_eq!(review.multimedia.width, 210);
    }

    #[test]
    fn test_critics_pick_is_strict_equality_to_one() {
        assert!(review(raw_review(json!({"critics_pick": 1}))).unwrap().critics_pick);
        assert!(!review(raw_review(json!({"critics_pick": 0}))).unwrap().critics_pick);
        assert!(!review(raw_review(json!({"critics_pick": 2}))).unwrap().critics_pick);
        assert!(!review(raw_review(json!({"critics_pick": "1"}))).unwrap().critics_pick);
        assert!(!review(raw_review(json!({"critics_pick": null}))).unwrap().critics_pick);
    }

    #[test]
    fn test_missing_optional_fields() {
        let raw: RawReview = serde_json::from_value(json!({
            "display_title": "Tenet",
            "mpaa_rating": "PG-13",
            "byline": "Manohla Dargis",
            "headline": "‘Tenet’ Review",
            "summary_short": "",
            "publication_date": "2020-09-02",
            "date_updated": "2020-09-03 11:44:02",
            "link": {"type": "article", "url": "https://nyti.ms/tenet", "suggested_link_text": "Read"},
            "multimedia": {"type": "image", "src": "https://nyti.ms/tenet.jpg", "height": 140, "width": 210}
        }))
        .unwrap();

        let review = review(raw).unwrap();
        assert!(!review.critics_pick);
        assert_eq!(review.opening_date, None);
    }

    #[test]
    fn test_null_opening_date() {
        let review = review(raw_review(json!({"opening_date": null}))).unwrap();
        assert_eq!(review.opening_date, None);
    }

    #[test]
    fn test_malformed_date_rejected() {
        let err = review(raw_review(json!({"date_updated": "yesterday"}))).unwrap_err();
        match err {
            NytError::InvalidDate { field, value } => {
                assert_eq!(field, "date_updated");
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(review(raw_review(json!({"publication_date": "2019-13-45"}))).is_err());
    }

    #[test]
    fn test_datetime_formats() {
        let parsed = parse_datetime("f", "2019-10-11T12:04:02-04:00").unwrap();
        assert_eq!(parsed.hour(), 16);

        let parsed = parse_datetime("f", "2019-10-11").unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2019, 10, 11));
        assert_eq!(parsed.hour(), 0);

        assert!(parse_datetime("f", "").is_err());
    }

    #[test]
    fn test_date_keeps_written_calendar_day() {
        let date = parse_date("f", "2019-10-11 23:59:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 10, 11).unwrap());

        // 23:00 at UTC-5 is the next day in UTC
        let date = parse_date("f", "2019-10-10T23:00:00-05:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 10, 10).unwrap());
        let review = review(raw_review(json!({"opening_date": "2019-10-10T23:00:00-05:00"}))).unwrap();
        assert_eq!(review.opening_date, NaiveDate::from_ymd_opt(2019, 10, 10));
    }

    #[test]
    fn test_critic_with_nested_multimedia() {
        let raw: RawCritic = serde_json::from_value(json!({
            "display_name": "Manohla Dargis",
            "sort_name": "Dargis, Manohla",
            "status": "full-time",
            "bio": "Manohla Dargis is a chief film critic.",
            "seo_name": "Manohla-Dargis",
            "multimedia": {
                "resource": {
                    "type": "image",
                    "src": "https://static01.nyt.com/images/dargis.jpg",
                    "height": 140,
                    "width": 140
                }
            }
        }))
        .unwrap();

        let critic = critic(raw);
        assert_eq!(critic.display_name, "Manohla Dargis");
        assert_eq!(critic.sort_name, "Dargis, Manohla");
        assert_eq!(critic.status, CriticStatus::FullTime);
        assert_eq!(critic.seo_name, "Manohla-Dargis");
        let multimedia = critic.multimedia.unwrap();
        assert_eq!(multimedia.media_type, "image");
        assert_eq!(multimedia.src, "https://static01.nyt.com/images/dargis.jpg");
        assert_eq!((multimedia.height, multimedia.width), (140, 140));
    }

    #[test]
    fn test_critic_without_multimedia() {
        let raw: RawCritic = serde_json::from_value(json!({
            "display_name": "Jane Doe",
            "sort_name": "Doe, Jane",
            "status": "",
            "bio": null,
            "seo_name": "Jane-Doe",
            "multimedia": null
        }))
        .unwrap();

        let critic = critic(raw);
        assert_eq!(critic.status, CriticStatus::None);
        assert_eq!(critic.bio, None);
        assert_eq!(critic.multimedia, None);
    }
}
