use super::*;
use crate::state::test_helpers;

#[test]
fn content_error_to_status_maps_invalid_slug_to_not_found() {
    assert_eq!(content_error_to_status(ContentError::InvalidSlug("x".into())), StatusCode::NOT_FOUND);
}

#[test]
fn content_error_to_status_maps_invalid_contact() {
    assert_eq!(content_error_to_status(ContentError::InvalidContact("bad")), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn content_error_to_status_maps_db_errors() {
    assert_eq!(content_error_to_status(ContentError::Db(sqlx::Error::RowNotFound)), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn get_post_with_bad_slug_is_not_found() {
    let state = test_helpers::test_app_state();
    let result = get_post(State(state), Path("../admin".to_owned())).await;
    assert!(matches!(result, Err(StatusCode::NOT_FOUND)));
}
