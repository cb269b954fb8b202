//! Customer accounts, alerts, and invoices for the dashboards.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Trial,
    Suspended,
}

impl AccountStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Trial => "Trial",
            Self::Suspended => "Suspended",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Customer {
    pub id: &'static str,
    pub name: &'static str,
    pub plan: &'static str,
    pub sites: u32,
    pub monthly_kwh: f64,
    pub status: AccountStatus,
}

pub const CUSTOMERS: &[Customer] = &[
    Customer {
        id: "cus-100",
        name: "Heartland Municipal Power",
        plan: "Utility",
        sites: 2,
        monthly_kwh: 152_928.0,
        status: AccountStatus::Active,
    },
    Customer {
        id: "cus-101",
        name: "Cascade Paper Mill",
        plan: "Industrial",
        sites: 1,
        monthly_kwh: 394_488.0,
        status: AccountStatus::Active,
    },
    Customer {
        id: "cus-102",
        name: "Igiugig Village Council",
        plan: "Community",
        sites: 1,
        monthly_kwh: 44_064.0,
        status: AccountStatus::Trial,
    },
    Customer {
        id: "cus-103",
        name: "Harbor Tidal Labs",
        plan: "Industrial",
        sites: 1,
        monthly_kwh: 0.0,
        status: AccountStatus::Suspended,
    },
];

/// Account shown in the customer dashboard demo.
pub const DEMO_CUSTOMER_ID: &str = "cus-100";

pub fn find_customer(id: &str) -> Option<&'static Customer> {
    CUSTOMERS.iter().find(|c| c.id == id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: &'static str,
    pub site_id: &'static str,
    pub severity: Severity,
    pub message: &'static str,
    pub raised_at: &'static str,
}

pub const ALERTS: &[Alert] = &[
    Alert {
        id: "al-31",
        site_id: "rw-005",
        severity: Severity::Critical,
        message: "Generator offline: no telemetry for 6h",
        raised_at: "2024-05-14 06:12",
    },
    Alert {
        id: "al-30",
        site_id: "rw-003",
        severity: Severity::Warning,
        message: "Scheduled debris screen maintenance",
        raised_at: "2024-05-13 09:00",
    },
    Alert {
        id: "al-29",
        site_id: "rw-002",
        severity: Severity::Info,
        message: "Flow rate above seasonal average",
        raised_at: "2024-05-12 17:45",
    },
    Alert {
        id: "al-28",
        site_id: "rw-001",
        severity: Severity::Warning,
        message: "Bearing temperature trending upward",
        raised_at: "2024-05-11 22:30",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvoiceStatus {
    Paid,
    Due,
    Overdue,
}

impl InvoiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Due => "Due",
            Self::Overdue => "Overdue",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Invoice {
    pub id: &'static str,
    pub period: &'static str,
    pub amount_cents: u64,
    pub status: InvoiceStatus,
}

pub const INVOICES: &[Invoice] = &[
    Invoice { id: "inv-2405", period: "May 2024", amount_cents: 184_900, status: InvoiceStatus::Due },
    Invoice { id: "inv-2404", period: "April 2024", amount_cents: 179_450, status: InvoiceStatus::Paid },
    Invoice { id: "inv-2403", period: "March 2024", amount_cents: 162_300, status: InvoiceStatus::Paid },
    Invoice { id: "inv-2402", period: "February 2024", amount_cents: 158_800, status: InvoiceStatus::Paid },
];

/// Format cents as `$1,234.56`.
pub fn format_cents(cents: u64) -> String {
    let dollars = cents / 100;
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.{:02}", cents % 100)
}

/// Month-by-month generation for the energy page, in kWh.
pub const MONTHLY_GENERATION_KWH: &[(&str, f64)] = &[
    ("Dec", 118_400.0),
    ("Jan", 109_750.0),
    ("Feb", 121_300.0),
    ("Mar", 146_900.0),
    ("Apr", 171_200.0),
    ("May", 152_928.0),
];
