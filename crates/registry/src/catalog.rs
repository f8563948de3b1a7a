//! The static operation catalog.
//!
//! One row per externally-visible operation id. The original service grew
//! these as hundreds of near-identical generated handlers; here the whole
//! surface is data, iterated once at startup to build the dispatch index.
//! Operation naming is an enforced invariant of this table — the id prefix
//! must agree with the entry's category (see the tests in `lib.rs`).

use taifin_types::{Category, DispatchEntry, PostProcess, SourceId, UpstreamKind};

/// Security-code field names observed across TWSE/TPEx/MOPS dataset
/// releases. The filter probes these in order; none of them alone is stable.
pub const SECURITY_CODE_KEYS: &[&str] = &[
    "Code",
    "SecuritiesCompanyCode",
    "CompanyCode",
    "證券代號",
    "股票代號",
    "公司代號",
    "代號",
    "股票代碼",
];

/// Futures/options contract identifiers across TAIFEX releases.
pub const CONTRACT_KEYS: &[&str] = &["Contract", "ContractName", "契約", "商品代號"];

/// Company-name fields in MOEA/GCIS registration payloads.
pub const COMPANY_NAME_KEYS: &[&str] = &["Company_Name", "CompanyName", "公司名稱"];

/// Fuel product names in the CPC weekly price sheet.
pub const FUEL_PRODUCT_KEYS: &[&str] = &["產品名稱", "油品名稱", "Product"];

/// Tax item labels in MOF revenue sheets.
pub const TAX_ITEM_KEYS: &[&str] = &["稅目", "項目別"];

/// Administrative-region labels in MOEA county statistics.
pub const REGION_KEYS: &[&str] = &["縣市", "縣市別", "County"];

/// Industry labels in trade statistics.
pub const INDUSTRY_KEYS: &[&str] = &["行業別", "業別", "Industry"];

/// Bank identifiers in CBC/FSC datasets.
pub const BANK_NAME_KEYS: &[&str] = &["銀行", "金融機構名稱", "Bank"];

/// The JPY-pivot rate table every forex operation derives from.
pub const PIVOT_RATE_ENDPOINT: &str = "/latest/JPY";

/// Yahoo's chart API rejects default library agents.
const YAHOO_HEADERS: &[(&str, &str)] = &[("User-Agent", "Mozilla/5.0 (X11; Linux x86_64)")];

const fn json(
    operation_id: &'static str,
    category: Category,
    summary: &'static str,
    source: SourceId,
    endpoint: &'static str,
    policy: PostProcess,
) -> DispatchEntry {
    DispatchEntry {
        operation_id,
        category,
        summary,
        source: Some(source),
        endpoint,
        upstream: UpstreamKind::Json,
        policy,
        headers: &[],
        lookup_query: None,
    }
}

const fn csv(
    operation_id: &'static str,
    category: Category,
    summary: &'static str,
    source: SourceId,
    endpoint: &'static str,
    policy: PostProcess,
) -> DispatchEntry {
    DispatchEntry {
        operation_id,
        category,
        summary,
        source: Some(source),
        endpoint,
        upstream: UpstreamKind::Csv,
        policy,
        headers: &[],
        lookup_query: None,
    }
}

const fn derived(
    operation_id: &'static str,
    category: Category,
    summary: &'static str,
    policy: PostProcess,
) -> DispatchEntry {
    DispatchEntry {
        operation_id,
        category,
        summary,
        source: None,
        endpoint: "",
        upstream: UpstreamKind::Derived,
        policy,
        headers: &[],
        lookup_query: None,
    }
}

const fn forex_pair(
    operation_id: &'static str,
    summary: &'static str,
    base: &'static str,
    target: &'static str,
) -> DispatchEntry {
    json(
        operation_id,
        Category::Forex,
        summary,
        SourceId::ExchangeRate,
        PIVOT_RATE_ENDPOINT,
        PostProcess::CrossRate { base, target },
    )
}

const FILTER_BY_CODE: PostProcess = PostProcess::FilterRecords {
    candidate_keys: SECURITY_CODE_KEYS,
};

/// Every operation the engine can execute. Append-only in practice; ids are
/// part of the external contract and never renamed.
pub const CATALOG: &[DispatchEntry] = &[
    // 📈 Stock — TWSE/TPEx securities datasets
    json(
        "get_stock_quotes_realtime_all",
        Category::Stock,
        "獲取台股集中市場所有個股當日即時行情。包含開盤、最高、最低、收盤價、漲跌幅及成交量。數據源：臺灣證券交易所 (TWSE)。",
        SourceId::Twse,
        "/exchangeReport/STOCK_DAY_ALL",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_eps_ranking_summary",
        Category::Stock,
        "查詢台股上市公司每股盈餘 (EPS) 排名彙總。用於分析企業獲利能力與同產業競爭力排名。數據源：TWSE。",
        SourceId::Twse,
        "/opendata/t187ap14_L",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_dividend_yield_pe_pb",
        Category::Stock,
        "查詢上市個股的殖利率、本益比 (PE) 與股價淨值比 (PB) 估值數據。數據源：TWSE。",
        SourceId::Twse,
        "/exchangeReport/BWIBBU_ALL",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_institutional_investor_flow",
        Category::Stock,
        "獲取三大法人（外資、投信、自營商）合計買賣超彙總。判斷市場主力資金流向。數據源：TWSE。",
        SourceId::Twse,
        "/fund/BFI82U",
        PostProcess::Passthrough,
    ),
    json(
        "get_stock_institutional_trading_tpex",
        Category::Stock,
        "查詢上櫃市場三大法人買賣金額日報。數據源：證券櫃檯買賣中心 (TPEx)。",
        SourceId::Tpex,
        "/tpex_3insti_daily_trading",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_institutional_summary_tpex",
        Category::Stock,
        "查詢上櫃市場三大法人買賣超彙總統計。數據源：TPEx。",
        SourceId::Tpex,
        "/tpex_3insti_summary",
        PostProcess::Passthrough,
    ),
    json(
        "get_stock_margin_trading_balance",
        Category::Stock,
        "查詢全市場融資融券餘額明細與變動。用於分析散戶熱度與空方籌碼動向。數據源：TWSE。",
        SourceId::Twse,
        "/exchangeReport/MI_MARGN",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_odd_lot_trading_quotes",
        Category::Stock,
        "查詢盤中零股交易即時行情（1-999股）。包含成交價、買賣委託價量。數據源：TWSE。",
        SourceId::Twse,
        "/exchangeReport/TWTB4U",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_mops_significant_announcements",
        Category::Stock,
        "查詢公開資訊觀測站 (MOPS) 即時重大訊息。包含經營權變動、財務預警、利多利空公告。數據源：TWSE。",
        SourceId::Twse,
        "/opendata/t187ap04_L",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_price_limit_up_down_tracker",
        Category::Stock,
        "監控當日觸及或預告漲跌停價的股票清單。用於捕捉市場極端行情與強勢股。數據源：TWSE。",
        SourceId::Twse,
        "/exchangeReport/TWT84U",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_balance_sheet_general",
        Category::Stock,
        "獲取公開發行公司資產負債表彙總（一般業）。分析流動性、負債比與資產結構。數據源：TWSE。",
        SourceId::Twse,
        "/opendata/t187ap07_X_ci",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_monthly_revenue_summary",
        Category::Stock,
        "查詢上市公司每月營業收入彙總。包含單月營收、去年同期增減、MoM 與 YoY。數據源：TWSE。",
        SourceId::Twse,
        "/opendata/t187ap05_P",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_listed_company_basic_info",
        Category::Stock,
        "獲取上市公司登記基本資料（統一編號、負責人、地址、資本額、發言人、官網）。數據源：TWSE。",
        SourceId::Twse,
        "/opendata/t187ap03_L",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_etf_regular_savings_ranking",
        Category::Stock,
        "查詢定期定額交易戶數統計排行榜（個股與 ETF 分別排行）。數據源：TWSE。",
        SourceId::Twse,
        "/ETFReport/ETFRank",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_block_trade_daily_summary",
        Category::Stock,
        "查詢集中市場鉅額交易成交量值統計表。追蹤大額資金法人交易動向。數據源：TWSE。",
        SourceId::Twse,
        "/exchangeReport/BFIAUU",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_after_hours_trading_info",
        Category::Stock,
        "獲取集中市場盤後定價交易資訊。查詢收盤後的穩定成交價格與量。數據源：TWSE。",
        SourceId::Twse,
        "/exchangeReport/BFT41U",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_listed_stock_price_averages",
        Category::Stock,
        "查詢上市個股日收盤價及月平均收盤價。數據源：TWSE。",
        SourceId::Twse,
        "/exchangeReport/STOCK_DAY_AVG_ALL",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_daily_closing_quotes_all",
        Category::Stock,
        "獲取集中市場每日收盤行情彙總。數據源：TWSE。",
        SourceId::Twse,
        "/exchangeReport/MI_INDEX",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_yield_averages_by_industry",
        Category::Stock,
        "查詢各產業類別殖利率平均值統計。數據源：TWSE。",
        SourceId::Twse,
        "/opendata/t187ap16_L",
        PostProcess::Passthrough,
    ),
    json(
        "get_stock_pe_averages_by_industry",
        Category::Stock,
        "查詢各產業類別本益比平均值統計。數據源：TWSE。",
        SourceId::Twse,
        "/opendata/t187ap17_L",
        PostProcess::Passthrough,
    ),
    json(
        "get_stock_broker_list_all",
        Category::Stock,
        "獲取全體證券商基本資料名錄。數據源：TWSE。",
        SourceId::Twse,
        "/brokerService/brokerList",
        PostProcess::Passthrough,
    ),
    json(
        "get_stock_buyback_treasury_status",
        Category::Stock,
        "查詢上市公司執行買回庫藏股的進度、金額與股數統計。數據源：TWSE。",
        SourceId::Twse,
        "/opendata/t187ap09_L",
        FILTER_BY_CODE,
    ),
    json(
        "get_stock_broker_regular_savings_data",
        Category::Stock,
        "查詢目前開辦定期定額業務的證券商名單與承作規定。數據源：TWSE。",
        SourceId::Twse,
        "/brokerService/regularInvestment",
        PostProcess::Passthrough,
    ),
    json(
        "get_stock_ipo_new_listing_schedule",
        Category::Stock,
        "查詢台股新股上市 (IPO) 公告、申購時程與新掛牌進度。數據源：TWSE。",
        SourceId::Twse,
        "/opendata/t187ap11_L",
        FILTER_BY_CODE,
    ),
    // 📉 Derivatives — TAIFEX futures/options
    json(
        "get_futures_quotes_daily",
        Category::Derivatives,
        "獲取期貨每日收盤行情。數據源：臺灣期貨交易所 (TAIFEX)。",
        SourceId::Taifex,
        "/DailyQuotes",
        PostProcess::FilterRecords {
            candidate_keys: CONTRACT_KEYS,
        },
    ),
    json(
        "get_futures_institutional_investor_flow",
        Category::Derivatives,
        "獲取三大法人期貨交易量與未平倉量彙總。數據源：TAIFEX。",
        SourceId::Taifex,
        "/InstitutionalInvestorsDaily",
        PostProcess::FilterRecords {
            candidate_keys: CONTRACT_KEYS,
        },
    ),
    json(
        "get_futures_open_interest_ranking",
        Category::Derivatives,
        "獲取期貨大額交易人未平倉部位統計。數據源：TAIFEX。",
        SourceId::Taifex,
        "/LargeTradersPositionsDaily",
        PostProcess::FilterRecords {
            candidate_keys: CONTRACT_KEYS,
        },
    ),
    // 🌍 Forex — JPY-pivot cross rates
    forex_pair(
        "get_forex_usd_twd_realtime",
        "查詢美金 (USD) 兌換新台幣 (TWD) 的即時市場中間匯率。數據源：ExchangeRate-API。",
        "USD",
        "TWD",
    ),
    forex_pair(
        "get_forex_jpy_twd_realtime",
        "查詢日圓 (JPY) 兌換新台幣 (TWD) 的即時市場中間匯率。數據源：ExchangeRate-API。",
        "JPY",
        "TWD",
    ),
    forex_pair(
        "get_forex_eur_twd_realtime",
        "查詢歐元 (EUR) 兌換新台幣 (TWD) 的即時市場中間匯率。數據源：ExchangeRate-API。",
        "EUR",
        "TWD",
    ),
    forex_pair(
        "get_forex_cny_twd_realtime",
        "查詢人民幣 (CNY) 兌換新台幣 (TWD) 的即時市場中間匯率。數據源：ExchangeRate-API。",
        "CNY",
        "TWD",
    ),
    forex_pair(
        "get_forex_hkd_twd_realtime",
        "查詢港幣 (HKD) 兌換新台幣 (TWD) 的即時市場中間匯率。數據源：ExchangeRate-API。",
        "HKD",
        "TWD",
    ),
    forex_pair(
        "get_forex_gbp_twd_realtime",
        "查詢英鎊 (GBP) 兌換新台幣 (TWD) 的即時市場中間匯率。數據源：ExchangeRate-API。",
        "GBP",
        "TWD",
    ),
    forex_pair(
        "get_forex_aud_twd_realtime",
        "查詢澳幣 (AUD) 兌換新台幣 (TWD) 的即時市場中間匯率。數據源：ExchangeRate-API。",
        "AUD",
        "TWD",
    ),
    forex_pair(
        "get_forex_cad_twd_realtime",
        "查詢加幣 (CAD) 兌換新台幣 (TWD) 的即時市場中間匯率。數據源：ExchangeRate-API。",
        "CAD",
        "TWD",
    ),
    forex_pair(
        "get_forex_sgd_twd_realtime",
        "查詢新幣 (SGD) 兌換新台幣 (TWD) 的即時市場中間匯率。數據源：ExchangeRate-API。",
        "SGD",
        "TWD",
    ),
    forex_pair(
        "get_forex_krw_twd_realtime",
        "查詢韓元 (KRW) 兌換新台幣 (TWD) 的即時市場中間匯率。數據源：ExchangeRate-API。",
        "KRW",
        "TWD",
    ),
    json(
        "get_forex_any_to_any_conversion",
        Category::Forex,
        "任意幣別對任意幣別的即時交叉匯率換算。查詢值格式 BASE/TARGET，未給 TARGET 時預設 TWD。",
        SourceId::ExchangeRate,
        PIVOT_RATE_ENDPOINT,
        PostProcess::CrossRateFromLookup,
    ),
    // 🛢️ Commodity
    csv(
        "get_commodity_oil_wti_price_usd",
        Category::Commodity,
        "查詢美國西德州原油 (WTI) 報價 (USD/Barrel)。數據源：經濟部能源署 (MOEA)。",
        SourceId::GovData,
        "/dq_download_csv.php?nid=32756&md5_url=59196b0c242337d40236a281691a5f36",
        PostProcess::LatestIndicator {
            keywords: &["西德州"],
        },
    ),
    csv(
        "get_commodity_oil_brent_price_usd",
        Category::Commodity,
        "查詢北海布蘭特原油 (Brent) 報價 (USD/Barrel)。數據源：經濟部能源署 (MOEA)。",
        SourceId::GovData,
        "/dq_download_csv.php?nid=32756&md5_url=59196b0c242337d40236a281691a5f36",
        PostProcess::LatestIndicator {
            keywords: &["布蘭特"],
        },
    ),
    DispatchEntry {
        operation_id: "get_commodity_gold_spot_price_twd",
        category: Category::Commodity,
        summary: "查詢國際黃金現貨即時行情。避險資產核心參考。數據源：Yahoo Finance。",
        source: Some(SourceId::YahooFinance),
        endpoint: "/v8/finance/chart/GC%3DF?interval=1d&range=1d",
        upstream: UpstreamKind::Json,
        policy: PostProcess::ChartMeta,
        headers: YAHOO_HEADERS,
        lookup_query: None,
    },
    DispatchEntry {
        operation_id: "get_commodity_silver_spot_price_twd",
        category: Category::Commodity,
        summary: "查詢國際白銀現貨即時行情。工業與投資性貴金屬參考。數據源：Yahoo Finance。",
        source: Some(SourceId::YahooFinance),
        endpoint: "/v8/finance/chart/SI%3DF?interval=1d&range=1d",
        upstream: UpstreamKind::Json,
        policy: PostProcess::ChartMeta,
        headers: YAHOO_HEADERS,
        lookup_query: None,
    },
    derived(
        "get_commodity_baltic_dry_index_bdi",
        Category::Commodity,
        "查詢波羅的海乾散貨指數 (BDI)。全球大宗原物料航運運費的重要指標。",
        PostProcess::BalticDry,
    ),
    // 🏛️ Macro — DGBAS/MOL indicator datasets
    json(
        "get_macro_gdp_growth_rate_quarterly",
        Category::Macro,
        "查詢台灣季度 GDP 經濟成長率 (%)。數據源：行政院主計總處 (DGBAS)。",
        SourceId::GovData,
        "/dq_download_json.php?nid=6647&md5_url=59196b0c242337d40236a281691a5f36",
        PostProcess::LatestIndicator {
            keywords: &["經濟成長率"],
        },
    ),
    json(
        "get_macro_cpi_inflation_rate_tw",
        Category::Macro,
        "查詢台灣消費者物價指數 (CPI) 年增率。判斷通膨狀況的重要依據。數據源：DGBAS。",
        SourceId::GovData,
        "/dq_download_json.php?nid=6647&md5_url=59196b0c242337d40236a281691a5f36",
        PostProcess::LatestIndicator {
            keywords: &["消費者物價"],
        },
    ),
    json(
        "get_macro_unemployment_rate_seasonal_adjusted",
        Category::Macro,
        "查詢台灣最新失業率百分比。分析台灣就業市場供需。數據源：DGBAS。",
        SourceId::GovData,
        "/dq_download_json.php?nid=6647&md5_url=59196b0c242337d40236a281691a5f36",
        PostProcess::LatestIndicator {
            keywords: &["失業率"],
        },
    ),
    json(
        "get_macro_average_monthly_salary_dgbas",
        Category::Macro,
        "查詢台灣受僱員工每月平均名目總薪資。數據源：DGBAS。",
        SourceId::GovData,
        "/dq_download_json.php?nid=6647&md5_url=59196b0c242337d40236a281691a5f36",
        PostProcess::LatestIndicator {
            keywords: &["薪資"],
        },
    ),
    csv(
        "get_macro_fuel_price_cpc_retail",
        Category::Macro,
        "查詢台灣中油 (CPC) 當週掛牌零售油價（92/95/98無鉛、超級柴油）。數據源：台灣中油。",
        SourceId::GovData,
        "/dq_download_csv.php?nid=6712&md5_url=2851676f4e157208d3663a890473919d",
        PostProcess::FilterRecords {
            candidate_keys: FUEL_PRODUCT_KEYS,
        },
    ),
    json(
        "get_macro_national_debt_clock",
        Category::Macro,
        "查詢中央政府債務未償餘額（國債鐘）。數據源：財政部 (MOF)。",
        SourceId::GovData,
        "/dq_download_json.php?nid=5931&md5_url=e59196b0c242337d40236a281691a5f3",
        PostProcess::LatestIndicator {
            keywords: &["未償", "餘額"],
        },
    ),
    json(
        "get_macro_monthly_financial_indicators",
        Category::Macro,
        "查詢每月重要金融指標彙總（貨幣總計數、利率、匯率）。數據源：中央銀行 (CBC)。",
        SourceId::GovData,
        "/dq_download_json.php?nid=11399&md5_url=2851676f4e157208d3663a890473919d",
        PostProcess::Passthrough,
    ),
    // 💰 Tax — MOF statistics
    csv(
        "get_tax_revenue_collection_monthly",
        Category::Tax,
        "查詢全國各項賦稅收入最新月份的實徵淨額與年度累計統計。數據源：財政部 (MOF)。",
        SourceId::GovData,
        "/dq_download_csv.php?nid=7331&md5_url=e59196b0c242337d40236a281691a5f3",
        PostProcess::FilterRecords {
            candidate_keys: TAX_ITEM_KEYS,
        },
    ),
    json(
        "get_tax_income_bracket_calculator",
        Category::Tax,
        "獲取台灣綜合所得稅級距與免稅額試算資料。數據源：財政部。",
        SourceId::GovData,
        "/dq_download_json.php?nid=17531&md5_url=59196b0c242337d40236a281691a5f36",
        PostProcess::Passthrough,
    ),
    json(
        "get_tax_electronic_invoice_usage_stats",
        Category::Tax,
        "查詢台灣電子發票普及統計。數據源：財政部。",
        SourceId::GovData,
        "/dq_download_json.php?nid=33405&md5_url=2851676f4e157208d3663a890473919d",
        PostProcess::Passthrough,
    ),
    // 🏢 Corporate — MOEA registration & industry statistics
    DispatchEntry {
        operation_id: "get_corp_moea_business_registration",
        category: Category::Corporate,
        summary: "獲取經濟部商工登記公示資料（統一編號、代表人、地址、資本額、經營狀態）。數據源：經濟部 (MOEA)。",
        source: Some(SourceId::Gcis),
        endpoint: "/od/data/api/5F643FD0-7223-4CCF-ACC5-D030113B17D4?$format=json",
        upstream: UpstreamKind::Json,
        policy: PostProcess::FilterRecords {
            candidate_keys: COMPANY_NAME_KEYS,
        },
        headers: &[],
        lookup_query: Some(("$filter", "Company_Name like {lookup}")),
    },
    json(
        "get_corp_industry_production_index",
        Category::Corporate,
        "查詢台灣工業生產指數與年增率。判斷製造業生產動能。數據源：經濟部統計處。",
        SourceId::GovData,
        "/dq_download_json.php?nid=7289&md5_url=2851676f4e157208d3663a890473919d",
        PostProcess::LatestIndicator {
            keywords: &["工業生產指數"],
        },
    ),
    csv(
        "get_corp_factory_count_statistics",
        Category::Corporate,
        "查詢台灣各縣市工廠登記數量統計。數據源：經濟部 (MOEA)。",
        SourceId::GovData,
        "/dq_download_csv.php?nid=28572&md5_url=59196b0c242337d40236a281691a5f36",
        PostProcess::FilterRecords {
            candidate_keys: REGION_KEYS,
        },
    ),
    json(
        "get_corp_export_value_by_industry",
        Category::Corporate,
        "查詢按行業別劃分之出口貿易總值統計（美元）。數據源：經濟部 (MOEA)。",
        SourceId::GovData,
        "/dq_download_json.php?nid=8421&md5_url=e59196b0c242337d40236a281691a5f3",
        PostProcess::FilterRecords {
            candidate_keys: INDUSTRY_KEYS,
        },
    ),
    // 🏦 Bank — CBC/FSC datasets
    csv(
        "get_bank_deposit_rate_fixed",
        Category::Bank,
        "查詢台灣主要銀行定期存款利率。數據源：中央銀行。",
        SourceId::GovData,
        "/dq_download_csv.php?nid=44023&md5_url=2851676f4e157208d3663a890473919d",
        PostProcess::FilterRecords {
            candidate_keys: BANK_NAME_KEYS,
        },
    ),
    json(
        "get_bank_mortgage_rate_average",
        Category::Bank,
        "查詢台灣平均購屋貸款利率趨勢。數據源：中央銀行。",
        SourceId::GovData,
        "/dq_download_json.php?nid=25118&md5_url=59196b0c242337d40236a281691a5f36",
        PostProcess::LatestIndicator {
            keywords: &["貸款利率"],
        },
    ),
    json(
        "get_bank_credit_card_delinquency",
        Category::Bank,
        "信用卡逾期帳款統計。數據源：金管會。",
        SourceId::GovData,
        "/dq_download_json.php?nid=31203&md5_url=e59196b0c242337d40236a281691a5f3",
        PostProcess::LatestIndicator { keywords: &["逾期"] },
    ),
    json(
        "get_bank_atm_location_map",
        Category::Bank,
        "全台 ATM 網點設置位置分布統計。數據源：金管會。",
        SourceId::GovData,
        "/dq_download_json.php?nid=29951&md5_url=59196b0c242337d40236a281691a5f36",
        PostProcess::FilterRecords {
            candidate_keys: BANK_NAME_KEYS,
        },
    ),
    json(
        "get_bank_capital_adequacy_ratio",
        Category::Bank,
        "本國銀行資本適足率指標。數據源：金管會。",
        SourceId::GovData,
        "/dq_download_json.php?nid=31899&md5_url=2851676f4e157208d3663a890473919d",
        PostProcess::LatestIndicator {
            keywords: &["資本適足率"],
        },
    ),
    // 🪙 Crypto — CoinGecko & sentiment
    json(
        "get_crypto_btc_twd_price",
        Category::Crypto,
        "查詢比特幣 (Bitcoin) 的台幣與美金即時報價、24小時漲跌幅。數據源：CoinGecko。",
        SourceId::CoinGecko,
        "/simple/price?ids=bitcoin&vs_currencies=twd,usd&include_24hr_change=true",
        PostProcess::CoinQuote { coin: "bitcoin" },
    ),
    json(
        "get_crypto_eth_twd_price",
        Category::Crypto,
        "查詢以太幣 (Ethereum) 的台幣與美金即時報價、24小時漲跌幅。數據源：CoinGecko。",
        SourceId::CoinGecko,
        "/simple/price?ids=ethereum&vs_currencies=twd,usd&include_24hr_change=true",
        PostProcess::CoinQuote { coin: "ethereum" },
    ),
    json(
        "get_crypto_sol_twd_price",
        Category::Crypto,
        "查詢 Solana 的即時報價與 24 小時漲跌變動。數據源：CoinGecko。",
        SourceId::CoinGecko,
        "/simple/price?ids=solana&vs_currencies=twd,usd&include_24hr_change=true",
        PostProcess::CoinQuote { coin: "solana" },
    ),
    json(
        "get_crypto_trending_search",
        Category::Crypto,
        "查詢 CoinGecko 當前熱搜加密貨幣排行。",
        SourceId::CoinGecko,
        "/search/trending",
        PostProcess::Passthrough,
    ),
    json(
        "get_crypto_market_fear_greed_index",
        Category::Crypto,
        "查詢全球加密貨幣市場恐慌與貪婪指數。數據源：alternative.me。",
        SourceId::AlternativeMe,
        "/fng/",
        PostProcess::Passthrough,
    ),
    // 🕒 Common
    derived(
        "get_current_time_taipei",
        Category::Common,
        "獲取台北 (Asia/Taipei) 現下的精確系統時間。用於確認盤中、盤後或例假日狀態。",
        PostProcess::TaipeiClock,
    ),
];
