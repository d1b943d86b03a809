//! 차트 명세.
//!
//! 렌더링에 필요한 데이터만 담습니다. 색상, 레이아웃 등 표현 방식은 클라이언트가 정합니다.

use prophub_core::Cell;
use serde::Serialize;

use crate::metrics::{CrossTab, GroupValue, ScatterPoint, ValueCount};

/// 이름 있는 값 시계열 (다중 선/그룹 막대용).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// 차트 명세.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    /// 단일 숫자 지표 카드
    Indicator { title: String, value: f64 },
    /// 파이 차트
    Pie {
        title: String,
        labels: Vec<String>,
        values: Vec<f64>,
    },
    /// 막대 차트
    Bar {
        title: String,
        x_label: String,
        y_label: String,
        categories: Vec<String>,
        values: Vec<f64>,
    },
    /// 그룹 막대 차트 (카테고리별 여러 시리즈)
    GroupedBar {
        title: String,
        x_label: String,
        y_label: String,
        categories: Vec<String>,
        series: Vec<NamedSeries>,
    },
    /// 선 차트
    Line {
        title: String,
        x_label: String,
        y_label: String,
        x: Vec<Cell>,
        y: Vec<Option<f64>>,
    },
    /// 공통 x축을 쓰는 다중 선 차트
    MultiLine {
        title: String,
        x_label: String,
        x: Vec<Cell>,
        series: Vec<NamedSeries>,
    },
    /// 히스토그램
    Histogram {
        title: String,
        x_label: String,
        values: Vec<f64>,
        /// 구간 수 (없으면 클라이언트 기본값)
        #[serde(skip_serializing_if = "Option::is_none")]
        nbins: Option<usize>,
    },
    /// 산점도
    Scatter {
        title: String,
        x_label: String,
        y_label: String,
        points: Vec<ScatterPoint>,
    },
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Indicator { title, .. }
            | ChartSpec::Pie { title, .. }
            | ChartSpec::Bar { title, .. }
            | ChartSpec::GroupedBar { title, .. }
            | ChartSpec::Line { title, .. }
            | ChartSpec::MultiLine { title, .. }
            | ChartSpec::Histogram { title, .. }
            | ChartSpec::Scatter { title, .. } => title,
        }
    }

    pub fn indicator(title: impl Into<String>, value: f64) -> Self {
        ChartSpec::Indicator {
            title: title.into(),
            value,
        }
    }

    /// 값 빈도에서 파이 차트 생성.
    pub fn pie(title: impl Into<String>, counts: &[ValueCount]) -> Self {
        ChartSpec::Pie {
            title: title.into(),
            labels: counts.iter().map(|c| c.value.clone()).collect(),
            values: counts.iter().map(|c| c.count as f64).collect(),
        }
    }

    /// 값 빈도에서 막대 차트 생성.
    pub fn count_bar(title: impl Into<String>, x_label: impl Into<String>, counts: &[ValueCount]) -> Self {
        ChartSpec::Bar {
            title: title.into(),
            x_label: x_label.into(),
            y_label: "Count".to_string(),
            categories: counts.iter().map(|c| c.value.clone()).collect(),
            values: counts.iter().map(|c| c.count as f64).collect(),
        }
    }

    /// 그룹 집계값에서 막대 차트 생성.
    pub fn group_bar(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        groups: &[GroupValue],
    ) -> Self {
        ChartSpec::Bar {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            categories: groups.iter().map(|g| g.key.clone()).collect(),
            values: groups.iter().map(|g| g.value).collect(),
        }
    }

    /// 교차표에서 그룹 막대 차트 생성 (행 = 카테고리, 열 = 시리즈).
    pub fn crosstab_bar(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        table: &CrossTab,
    ) -> Self {
        let series = table
            .columns
            .iter()
            .enumerate()
            .map(|(j, name)| NamedSeries {
                name: name.clone(),
                values: table
                    .column_values(j)
                    .into_iter()
                    .map(|n| Some(n as f64))
                    .collect(),
            })
            .collect();

        ChartSpec::GroupedBar {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            categories: table.rows.clone(),
            series,
        }
    }

    pub fn histogram(
        title: impl Into<String>,
        x_label: impl Into<String>,
        values: Vec<f64>,
        nbins: Option<usize>,
    ) -> Self {
        ChartSpec::Histogram {
            title: title.into(),
            x_label: x_label.into(),
            values,
            nbins,
        }
    }
}

/// 대시보드 패널 (제목 + 차트 묶음).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub heading: String,
    pub charts: Vec<ChartSpec>,
}

impl Panel {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            charts: Vec::new(),
        }
    }

    pub fn push(&mut self, chart: ChartSpec) {
        self.charts.push(chart);
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

/// 알림 수준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// 사용자 알림.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}
