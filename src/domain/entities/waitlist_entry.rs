/// Monthly revenue bucket as offered by the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueBucket {
    Under10k,
    From10kTo50k,
    From50kTo100k,
    From100kTo500k,
    Over500k,
}

impl RevenueBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevenueBucket::Under10k => "under_10k",
            RevenueBucket::From10kTo50k => "10k_50k",
            RevenueBucket::From50kTo100k => "50k_100k",
            RevenueBucket::From100kTo500k => "100k_500k",
            RevenueBucket::Over500k => "over_500k",
        }
    }
}

impl std::fmt::Display for RevenueBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RevenueBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under_10k" => Ok(RevenueBucket::Under10k),
            "10k_50k" => Ok(RevenueBucket::From10kTo50k),
            "50k_100k" => Ok(RevenueBucket::From50kTo100k),
            "100k_500k" => Ok(RevenueBucket::From100kTo500k),
            "over_500k" => Ok(RevenueBucket::Over500k),
            _ => Err(format!("Invalid revenue bucket: {}", s)),
        }
    }
}

/// Primary sales/ads platform as offered by the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Stripe,
    Shopify,
    Woocommerce,
    MetaAds,
    GoogleAds,
    Other,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Stripe => "stripe",
            Platform::Shopify => "shopify",
            Platform::Woocommerce => "woocommerce",
            Platform::MetaAds => "meta_ads",
            Platform::GoogleAds => "google_ads",
            Platform::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stripe" => Ok(Platform::Stripe),
            "shopify" => Ok(Platform::Shopify),
            "woocommerce" => Ok(Platform::Woocommerce),
            "meta_ads" => Ok(Platform::MetaAds),
            "google_ads" => Ok(Platform::GoogleAds),
            "other" => Ok(Platform::Other),
            _ => Err(format!("Invalid platform: {}", s)),
        }
    }
}

/// A validated waitlist candidate, ready for insertion.
///
/// Invariants upheld by construction (see `WaitlistSubmission::validate`):
/// email is trimmed and non-empty, `biggest_pain` is never an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub monthly_revenue: RevenueBucket,
    pub platform: Platform,
    pub biggest_pain: Option<String>,
}
