use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod date;
pub mod protocol;

pub use date::TripDate;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 行程 ID
///
/// 后端返回的是数字，而路由参数是字符串；客户端统一按不透明字符串持有，
/// 发送请求时原样回传。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TripId(String);

impl TripId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for TripId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for TripId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for TripId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self::from(n),
            RawId::Text(s) => Self(s),
        })
    }
}

/// 旅行者身份：用户名或原始用户 ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TravelerRef {
    Id(i64),
    Name(String),
}

impl fmt::Display for TravelerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelerRef::Id(id) => write!(f, "{}", id),
            TravelerRef::Name(name) => f.write_str(name),
        }
    }
}

/// 行程
///
/// 通过 `RawTrip` 反序列化：`null` 字段按缺省处理，`date` / `travel_date`
/// 与 `traveler` / `user_id` 同时出现时取前者，单个字段异常不会让整个列表解析失败。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTrip")]
pub struct Trip {
    pub id: TripId,
    pub origin: String,
    pub destination: String,
    pub date: TripDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traveler_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traveler: Option<TravelerRef>,
}

/// `null` 与缺失一样取默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 后端行程的传输形态
#[derive(Deserialize)]
struct RawTrip {
    id: TripId,
    #[serde(default, deserialize_with = "null_as_default")]
    origin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    destination: String,
    #[serde(default, deserialize_with = "null_as_default")]
    date: TripDate,
    #[serde(default, deserialize_with = "null_as_default")]
    travel_date: TripDate,
    #[serde(default)]
    traveler_username: Option<String>,
    #[serde(default)]
    traveler: Option<TravelerRef>,
    #[serde(default)]
    user_id: Option<TravelerRef>,
}

impl From<RawTrip> for Trip {
    fn from(raw: RawTrip) -> Self {
        let date = if raw.date.raw().is_empty() {
            raw.travel_date
        } else {
            raw.date
        };
        Self {
            id: raw.id,
            origin: raw.origin,
            destination: raw.destination,
            date,
            traveler_username: raw.traveler_username,
            traveler: raw.traveler.or(raw.user_id),
        }
    }
}

impl Trip {
    /// 列表和详情页展示的旅行者名称
    pub fn traveler_label(&self) -> String {
        match (&self.traveler_username, &self.traveler) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(traveler)) => traveler.to_string(),
            _ => String::new(),
        }
    }

    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

/// 当前登录用户的资料 (`/auth/me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// =========================================================
// 请求 / 响应体 (Payloads)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录响应
///
/// 规范字段为 `access_token`；旧版后端返回 `token`，仅作为回退读取。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl LoginResponse {
    pub fn into_token(self) -> Option<String> {
        self.access_token
            .filter(|t| !t.is_empty())
            .or(self.token.filter(|t| !t.is_empty()))
    }
}

/// 针对某个行程发起的代购请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePurchaseRequest {
    pub trip_id: TripId,
    pub product_name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trip_accepts_backend_shape() {
        let trip: Trip = serde_json::from_value(json!({
            "id": 7,
            "origin": "NYC",
            "destination": "LON",
            "travel_date": "2025-01-01T09:30:00",
            "user_id": 42
        }))
        .unwrap();

        assert_eq!(trip.id.as_str(), "7");
        assert_eq!(trip.traveler_label(), "42");
        assert_eq!(trip.date.display(), "2025-01-01");
        assert_eq!(trip.route_label(), "NYC → LON");
    }

    #[test]
    fn test_trip_prefers_traveler_username() {
        let trip: Trip = serde_json::from_value(json!({
            "id": "abc",
            "origin": "Paris",
            "destination": "Seoul",
            "date": "2025-03-04",
            "traveler_username": "alice",
            "traveler": "a-1"
        }))
        .unwrap();

        assert_eq!(trip.id, TripId::from("abc"));
        assert_eq!(trip.traveler_label(), "alice");
    }

    #[test]
    fn test_trip_without_traveler_or_date() {
        let trip: Trip = serde_json::from_value(json!({
            "id": 1,
            "origin": "NYC",
            "destination": "LON"
        }))
        .unwrap();

        assert_eq!(trip.traveler_label(), "");
        assert_eq!(trip.date.display(), "");
    }

    #[test]
    fn test_null_date_degrades_only_that_trip() {
        let trips: Vec<Trip> = serde_json::from_value(json!([
            {"id": 1, "origin": "NYC", "destination": "LON", "date": "2025-01-01"},
            {"id": 2, "origin": "NYC", "destination": "LON", "date": null, "traveler": null}
        ]))
        .unwrap();

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].date.display(), "2025-01-01");
        assert_eq!(trips[1].date.display(), "");
        assert_eq!(trips[1].traveler_label(), "");
    }

    #[test]
    fn test_both_key_spellings_present() {
        let trip: Trip = serde_json::from_value(json!({
            "id": 4,
            "origin": "Lima",
            "destination": "Oslo",
            "date": "2025-02-02",
            "travel_date": "2025-09-09",
            "traveler": "carol",
            "user_id": 17
        }))
        .unwrap();

        assert_eq!(trip.date.display(), "2025-02-02");
        assert_eq!(trip.traveler_label(), "carol");

        // date 为 null 时回退到 travel_date
        let trip: Trip = serde_json::from_value(json!({
            "id": 5,
            "origin": "Lima",
            "destination": "Oslo",
            "date": null,
            "travel_date": "2025-09-09"
        }))
        .unwrap();
        assert_eq!(trip.date.display(), "2025-09-09");
    }

    #[test]
    fn test_trip_id_serializes_as_string() {
        let body = CreatePurchaseRequest {
            trip_id: TripId::from(5),
            product_name: "Bag".to_string(),
            description: "Black tote".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"trip_id": "5", "product_name": "Bag", "description": "Black tote"})
        );
    }

    #[test]
    fn test_login_response_prefers_access_token() {
        let both: LoginResponse =
            serde_json::from_value(json!({"access_token": "A", "token": "B"})).unwrap();
        assert_eq!(both.into_token().as_deref(), Some("A"));

        let legacy: LoginResponse = serde_json::from_value(json!({"token": "B"})).unwrap();
        assert_eq!(legacy.into_token().as_deref(), Some("B"));

        let empty: LoginResponse =
            serde_json::from_value(json!({"access_token": "", "token_type": "bearer"})).unwrap();
        assert_eq!(empty.into_token(), None);
    }

    #[test]
    fn test_user_requires_username_only() {
        let user: User = serde_json::from_value(json!({"username": "bob"})).unwrap();
        assert_eq!(user.username, "bob");
        assert_eq!(user.id, None);
    }
}
