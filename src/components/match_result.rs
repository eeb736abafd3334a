use crate::models::{MatchPresentation, MatchReport};
use crate::services::verdict;
use dioxus::prelude::*;
use dioxus_i18n::t;
use match_client::MatchMethod;

/// Result card above the found-child form
#[component]
pub fn MatchResultCard(report: MatchReport) -> Element {
    match verdict::present(&report) {
        MatchPresentation::Confirmed {
            child_name,
            location,
            method,
            confidence,
            mole_confirmed,
            notification_sent,
        } => rsx! {
            div { style: "margin-bottom: 16px; padding: 16px; background: #f0fdf4; border: 1px solid #bbf7d0; border-radius: 8px;",
                h3 { style: "margin: 0 0 8px 0; color: #166534; font-size: 16px;",
                    "✅ "
                    {t!("match-found-title")}
                }
                p { style: "margin: 0; color: #15803d; font-size: 14px;",
                    {t!("match-found-body", name: child_name, location: location)}
                }
                if let Some(confidence) = confidence {
                    p { style: "margin: 6px 0 0 0; color: #16a34a; font-size: 13px;",
                        {t!("match-confidence", confidence: confidence)}
                        if mole_confirmed {
                            span { style: "margin-left: 8px; font-weight: 600;",
                                {t!("match-mole-confirmed")}
                            }
                        }
                    }
                }
                if method == MatchMethod::MoleDescription {
                    p { style: "margin: 6px 0 0 0; color: #16a34a; font-size: 13px;",
                        {t!("match-by-mole")}
                    }
                }
                match notification_sent {
                    Some(true) => rsx! {
                        p { style: "margin: 6px 0 0 0; color: #16a34a; font-size: 13px;",
                            {t!("match-sms-sent")}
                        }
                    },
                    Some(false) => rsx! {
                        p { style: "margin: 6px 0 0 0; color: #b45309; font-size: 13px;",
                            {t!("match-sms-failed")}
                        }
                    },
                    None => rsx! {},
                }
            }
        },
        MatchPresentation::LowConfidence { confidence, threshold } => rsx! {
            div { style: "margin-bottom: 16px; padding: 16px; background: #fffbeb; border: 1px solid #fde68a; border-radius: 8px;",
                h3 { style: "margin: 0 0 8px 0; color: #92400e; font-size: 16px;",
                    "⚠️ "
                    {t!("match-low-title")}
                }
                p { style: "margin: 0; color: #b45309; font-size: 14px;",
                    {t!("match-low-body", confidence: confidence, threshold: threshold)}
                }
            }
        },
        MatchPresentation::Nothing => rsx! {},
    }
}
