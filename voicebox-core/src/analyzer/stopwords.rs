//! Static stop-word asset.
//!
//! Domain-specific noise terms: business jargon, generic request words and
//! partial contact fragments that would otherwise dominate the frequency
//! table. The list is a compiled configuration asset, not derived from data;
//! editing it never requires touching the retention logic.

/// Surface forms excluded from the meaningful vocabulary.
#[rustfmt::skip]
pub const STOP_WORDS: &[&str] = &[
    "http", "https", "会員", "店舗", "利用", "お願い", "ヶ月", "弊社", "世話",
    "プログラム", "スタッフ", "入電", "ホリデイ", "時間", "対応", "店長",
    "今回", "大変", "スポーツ", "メディア", "使用", "連絡", "従業", "匿名",
    "to", "sho", "net", "info", "電話,", "宛先", "方々", "運営", "正直",
    "会社", "案内", "株式会社", "多く", "営業", "希望", "説明", "今後",
    "担当", "場合", "現在", "お世話", "こちら", "自分", "以上", "社員",
    "内容", "ホリデー", "クラブ", "今日", "毎日", "宜しく", "御社", "失礼",
    "直接", "その後", "貴社", "予定", "設定", "本社", "本部", "メール",
    "だらけ", "ホリデイスポーツクラブ", "番号", "先日", "方法", "仕方",
    "提供", "毎回", "以外", "全て", "jp", "問い合わせ", "欲しい", "ほしい",
    "ところ", "事業", "状況", "指摘,", "意見", "同士", "行為", "返答",
    "投稿", "相談", "是非", "開催", "一部", "難しい", "関係", "最近",
    "上記", "通り", "周り", "Fi", "回答", "問題", "要望", "みんな", "返信",
    "本日", "皆さん", "com", "早急", "以前", "週間", "お客様", "仕事",
    "情報", "平日", "Wi", "トレ", "今月", "確認", "インストラクター",
    "意味", "一緒", "状態", "実施", "特定", "みたい", "責任", "現状",
    "可能", "部分", "先生", "程度", "フリー", "企業", "昨日", "制限",
    "契約", "申し訳", "紀文", "管理", "お伝え", "提案", "質問", "感じ",
    "自身", "非常", "経営", "なかっ", "商品", "理由", "たくさん", "施設",
    "以降", "喚起", "導入", "個人", "全体", "特別", "以下", "いかが",
];
