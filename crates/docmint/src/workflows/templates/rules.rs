use super::inference::VariableType;
use regex::Regex;
use std::sync::LazyLock;

/// One entry of the ordered inference table. The first rule whose pattern
/// matches a variable name wins outright; there is no scoring.
pub(crate) struct InferenceRule {
    pub(crate) pattern: Regex,
    pub(crate) kind: VariableType,
    pub(crate) options: Option<&'static [&'static str]>,
    pub(crate) required: bool,
    pub(crate) placeholder: Option<&'static str>,
    pub(crate) help_text: Option<&'static str>,
}

impl InferenceRule {
    fn new(pattern: &str, kind: VariableType) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("inference rule pattern is valid"),
            kind,
            options: None,
            required: false,
            placeholder: None,
            help_text: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = Some(options);
        self
    }

    fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    fn help(mut self, text: &'static str) -> Self {
        self.help_text = Some(text);
        self
    }
}

/// The rule table, ordered by specificity. Exact-match rules anchor the whole
/// name so well-known variables get rich metadata; suffix rules anchor only
/// the end of the name and catch variants like `custom_end_date`. Order is
/// load-bearing: do not reorder entries.
pub(crate) fn inference_rules() -> &'static [InferenceRule] {
    static RULES: LazyLock<Vec<InferenceRule>> = LazyLock::new(|| {
        vec![
            // Dates, most specific first
            InferenceRule::new(
                r"(?i)^(date|日期|deadline|due_date|start_date|end_date|created_at|updated_at|時間)$",
                VariableType::Date,
            )
            .placeholder("YYYY-MM-DD")
            .help("Select a date"),
            InferenceRule::new(r"(?i)(date|日期|time|時間|day|年|月|日)$", VariableType::Date)
                .placeholder("YYYY-MM-DD"),
            // Email
            InferenceRule::new(r"(?i)^(email|mail|e_mail|電郵|郵箱|信箱)$", VariableType::Email)
                .placeholder("example@company.com")
                .help("Enter a valid email address"),
            InferenceRule::new(r"(?i)(email|mail|e_mail)$", VariableType::Email)
                .placeholder("user@example.com"),
            // Phone
            InferenceRule::new(
                r"(?i)^(phone|tel|mobile|cell|telephone|電話|手機|聯絡電話)$",
                VariableType::Tel,
            )
            .placeholder("02-1234-5678")
            .help("Enter phone number"),
            InferenceRule::new(r"(?i)(phone|tel|fax|傳真)$", VariableType::Tel)
                .placeholder("0912-345-678"),
            // Numbers and amounts
            InferenceRule::new(
                r"(?i)^(price|amount|cost|fee|total|subtotal|tax|discount|quantity|count|number|金額|價格|數量|總計|小計|稅金)$",
                VariableType::Number,
            )
            .placeholder("0.00")
            .help("Enter numeric value"),
            InferenceRule::new(r"(?i)(price|amount|cost|fee|金額|價格)$", VariableType::Number)
                .placeholder("0"),
            // Selects with predefined options
            InferenceRule::new(r"(?i)^(status|狀態)$", VariableType::Select)
                .options(&[
                    "draft",
                    "in_progress",
                    "paused",
                    "pending_invoice",
                    "pending_payment",
                    "completed",
                ])
                .required()
                .help("Select project status"),
            InferenceRule::new(r"(?i)^(type|類型|category|分類|kind|種類)$", VariableType::Select)
                .options(&["quote", "contract", "invoice", "custom"])
                .help("Select document type"),
            InferenceRule::new(r"(?i)^(terms|payment_terms|付款條件)$", VariableType::Select)
                .options(&["Cash", "NET 30", "NET 60", "Installment", "Upon Completion"])
                .help("Select payment terms"),
            InferenceRule::new(r"(?i)^(priority|優先級)$", VariableType::Select)
                .options(&["Low", "Medium", "High", "Urgent"]),
            // Longer text
            InferenceRule::new(
                r"(?i)^(description|desc|notes|note|remark|remarks|comment|comments|details|說明|備註|詳情)$",
                VariableType::Textarea,
            )
            .placeholder("Enter detailed description...")
            .help("Provide detailed information"),
            InferenceRule::new(
                r"(?i)(description|desc|notes|remark|comment)$",
                VariableType::Textarea,
            ),
            // Generic select hints
            InferenceRule::new(r"(?i)(option|choice|selection|選項)$", VariableType::Select)
                .options(&["Option 1", "Option 2", "Option 3"])
                .help("Customize options as needed"),
        ]
    });

    &RULES
}
