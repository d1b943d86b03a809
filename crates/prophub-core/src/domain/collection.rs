//! 컬렉션 정의.
//!
//! 대시보드가 조회하는 Directus 컬렉션과 각 컬렉션의 필터 필드,
//! 조회 한도, 표시 이름을 정의합니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProphubError;

/// 원본 컬럼 이름.
pub mod columns {
    pub const DATE_CREATED: &str = "date_created";
    pub const DATE_UPDATED: &str = "date_updated";
    pub const CREATED_AT: &str = "created_at";
    pub const DATA_REF: &str = "data_ref";

    // Trading History
    pub const OPEN_TIME: &str = "Opentime";
    pub const CLOSE_TIME: &str = "Closetime";
    pub const OPEN_PRICE: &str = "Openprice";
    pub const CLOSE_PRICE: &str = "Closeprice";
    pub const DURATION: &str = "Duration";
    pub const LOTS: &str = "Lots";
    pub const TICKS: &str = "Ticks";
    pub const INITIAL_BALANCE: &str = "Initial_Balance";
    pub const ASSET: &str = "Asset";
    pub const SIDE: &str = "Side";
    pub const TYPE: &str = "Type";
    pub const ACCOUNT_STATUS: &str = "Account_status";
    /// 계산 컬럼: 포인트 단위 손익
    pub const PNL_POINTS: &str = "PnL_points";

    // Drawdown Tracking
    pub const DD_RESTANTE: &str = "dd_restante";
    pub const SALDO_ATUAL: &str = "saldo_atual";
    pub const SALDO_FLT: &str = "saldo_flt";
    pub const DD_MAX: &str = "dd_max";
    pub const PERDA_MAX: &str = "perda_max";
    pub const MAX_CONTA: &str = "max_conta";
    pub const HWM: &str = "hwm";

    pub const TRADING_DATE_COLUMNS: &[&str] = &[DATE_CREATED, DATE_UPDATED, OPEN_TIME, CLOSE_TIME];

    pub const TRADING_NUMERIC_COLUMNS: &[&str] =
        &[OPEN_PRICE, CLOSE_PRICE, DURATION, LOTS, TICKS, INITIAL_BALANCE];

    pub const DRAWDOWN_NUMERIC_COLUMNS: &[&str] = &[
        DD_RESTANTE,
        SALDO_ATUAL,
        SALDO_FLT,
        DD_MAX,
        PERDA_MAX,
        MAX_CONTA,
        HWM,
    ];

    /// 일별 빈도 차트의 날짜 컬럼 후보 (우선순위 순).
    pub const FREQUENCY_DATE_CANDIDATES: &[&str] = &[DATE_CREATED, CREATED_AT, DATA_REF];
}

/// 계좌 데이터 컬렉션.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    /// 거래 내역
    TradingHistory,
    /// 잔고 로그
    Balance,
    /// 손익 로그
    Pnl,
    /// 낙폭 추적 로그
    DrawdownTracking,
    /// 통계 (단일 행)
    Estatistica,
    /// 계좌 정보 (선택 불가, 상단 정보 카드용)
    AccountInfo,
}

impl Collection {
    /// 조회 순서대로 나열한 전체 컬렉션.
    pub const ALL: [Collection; 6] = [
        Collection::TradingHistory,
        Collection::Balance,
        Collection::Pnl,
        Collection::DrawdownTracking,
        Collection::Estatistica,
        Collection::AccountInfo,
    ];

    /// 사용자가 선택할 수 있는 컬렉션 (메뉴 순서).
    pub const SELECTABLE: [Collection; 5] = [
        Collection::TradingHistory,
        Collection::Balance,
        Collection::Pnl,
        Collection::DrawdownTracking,
        Collection::Estatistica,
    ];

    /// URL 경로에 쓰는 식별자.
    pub fn slug(&self) -> &'static str {
        match self {
            Collection::TradingHistory => "trading-history",
            Collection::Balance => "balance",
            Collection::Pnl => "pnl",
            Collection::DrawdownTracking => "drawdown-tracking",
            Collection::Estatistica => "estatistica",
            Collection::AccountInfo => "account-info",
        }
    }

    /// 메뉴 표시 이름.
    pub fn title(&self) -> &'static str {
        match self {
            Collection::TradingHistory => "Trading History",
            Collection::Balance => "Balance",
            Collection::Pnl => "PnL",
            Collection::DrawdownTracking => "Drawdown Tracking",
            Collection::Estatistica => "Estatística",
            Collection::AccountInfo => "Account Info",
        }
    }

    /// 메뉴 아이콘 이름 (bootstrap icons).
    pub fn icon(&self) -> &'static str {
        match self {
            Collection::TradingHistory => "bar-chart",
            Collection::Balance => "credit-card",
            Collection::Pnl => "cash-coin",
            Collection::DrawdownTracking => "exclamation-triangle",
            Collection::Estatistica => "calculator",
            Collection::AccountInfo => "info-circle",
        }
    }

    /// 계좌 번호 equality 필터에 쓰는 필드 이름.
    ///
    /// 컬렉션마다 필드 이름의 대소문자가 다릅니다.
    pub fn account_filter_field(&self) -> &'static str {
        match self {
            Collection::TradingHistory => "Account",
            Collection::Pnl => "Account_number",
            Collection::Balance
            | Collection::DrawdownTracking
            | Collection::Estatistica
            | Collection::AccountInfo => "account_number",
        }
    }

    /// 조회 한도 (`-1`은 전체).
    pub fn fetch_limit(&self) -> i64 {
        match self {
            Collection::AccountInfo => 1,
            _ => -1,
        }
    }

    pub fn is_selectable(&self) -> bool {
        !matches!(self, Collection::AccountInfo)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Collection {
    type Err = ProphubError;

    /// 식별자(`drawdown-tracking`) 또는 표시 이름(`Drawdown Tracking`)을 받습니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Collection::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(needle) || c.title().eq_ignore_ascii_case(needle))
            .or_else(|| match needle.to_lowercase().as_str() {
                "estatística" => Some(Collection::Estatistica),
                "trading_history" => Some(Collection::TradingHistory),
                "drawdown_tracking" => Some(Collection::DrawdownTracking),
                _ => None,
            })
            .ok_or_else(|| ProphubError::InvalidInput(format!("unknown collection: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_slug_and_title() {
        assert_eq!("trading-history".parse::<Collection>().unwrap(), Collection::TradingHistory);
        assert_eq!("Drawdown Tracking".parse::<Collection>().unwrap(), Collection::DrawdownTracking);
        assert_eq!("Estatística".parse::<Collection>().unwrap(), Collection::Estatistica);
        assert_eq!("ESTATÍSTICA".parse::<Collection>().unwrap(), Collection::Estatistica);
        assert_eq!("pnl".parse::<Collection>().unwrap(), Collection::Pnl);
        assert!("orders".parse::<Collection>().is_err());
    }

    #[test]
    fn test_filter_fields_and_limits() {
        assert_eq!(Collection::TradingHistory.account_filter_field(), "Account");
        assert_eq!(Collection::Pnl.account_filter_field(), "Account_number");
        assert_eq!(Collection::Balance.account_filter_field(), "account_number");
        assert_eq!(Collection::AccountInfo.fetch_limit(), 1);
        assert_eq!(Collection::DrawdownTracking.fetch_limit(), -1);
    }

    #[test]
    fn test_selectable_excludes_account_info() {
        assert!(Collection::SELECTABLE.iter().all(Collection::is_selectable));
        assert!(!Collection::AccountInfo.is_selectable());
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Collection::DrawdownTracking).unwrap();
        assert_eq!(json, r#""drawdown-tracking""#);
    }
}
