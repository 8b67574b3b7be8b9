use cine_portal::auth::{Claims, issue_token};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;

const SECRET: &str = "unit-test-secret";

#[test]
fn issued_token_carries_the_user_id() {
    let user_id = Uuid::from_u128(42);
    let token = issue_token(user_id, SECRET).unwrap();

    let data = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap();

    assert_eq!(data.claims.sub, user_id);
    assert!(data.claims.exp > data.claims.iat);
}

#[test]
fn token_expires_a_day_out() {
    let token = issue_token(Uuid::from_u128(42), SECRET).unwrap();
    let data = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap();

    assert_eq!(data.claims.exp - data.claims.iat, 60 * 60 * 24);
}

#[test]
fn wrong_secret_fails_validation() {
    let token = issue_token(Uuid::from_u128(42), SECRET).unwrap();

    let result = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(b"a-different-secret"),
        &Validation::new(Algorithm::HS256),
    );

    assert!(result.is_err());
}
