use folio::SiteConfig;
use serde_json::{Value, json};

pub fn config() -> SiteConfig {
    SiteConfig {
        title: "Island Notes".to_string(),
        posts_per_page: 4,
        ..SiteConfig::default()
    }
}

fn toc(entries: &[(&str, u8)]) -> Value {
    entries
        .iter()
        .map(|(text, depth)| {
            let anchor = text.to_lowercase().replace(' ', "-");
            json!({ "value": text, "url": format!("#{anchor}"), "depth": depth })
        })
        .collect()
}

/// Seven posts, one of them a draft, deliberately out of date order.
pub fn posts() -> Value {
    json!([
        {
            "slug": "kaohsiung-harbor",
            "path": "blog/kaohsiung-harbor",
            "date": "2023-12-01",
            "title": "Kaohsiung Harbor",
            "summary": "Ferries and container cranes.",
            "tags": ["Harbor"],
            "categories": ["Kaohsiung", "高雄"]
        },
        {
            "slug": "taipei-night-markets",
            "path": "blog/taipei-night-markets",
            "date": "2024-03-10",
            "title": "Taipei Night Markets",
            "summary": "Where to eat after dark.",
            "tags": ["Food", "Night Market"],
            "categories": ["Taipei", "Xinyi"],
            "toc": toc(&[("Getting There", 1), ("By MRT", 2), ("By Bus", 2), ("What to Eat", 1), ("Snacks", 2)]),
            "authors": ["default", "guest"]
        },
        {
            "slug": "draft-post",
            "path": "blog/draft-post",
            "date": "2024-04-01",
            "title": "Unfinished",
            "tags": ["Draft Notes"],
            "categories": ["Taipei"],
            "draft": true
        },
        {
            "slug": "tainan-temples",
            "path": "blog/tainan-temples",
            "date": "2024-01-15",
            "title": "Tainan Temples",
            "tags": ["History", "Food"],
            "categories": ["Tainan", "Anping"]
        },
        {
            "slug": "daan-park-walk",
            "path": "blog/daan-park-walk",
            "date": "2024-02-20",
            "title": "A Walk in Daan Park",
            "tags": ["Walking"],
            "categories": ["Taipei", "Da'an"]
        },
        {
            "slug": "xinyi-skyline",
            "path": "blog/xinyi-skyline",
            "date": "2023-11-11",
            "title": "Xinyi Skyline",
            "tags": ["Photography"],
            "categories": ["Taipei", "Xinyi"],
            "toc": toc(&[("Overview", 1), ("Best Spot", 3), ("Timing", 2)])
        },
        {
            "slug": "anping-fort",
            "path": "blog/anping-fort",
            "date": "2023-10-05T09:00:00.000Z",
            "title": "Anping Fort",
            "tags": ["History"],
            "categories": ["Tainan", "Anping"]
        }
    ])
}

pub fn category_data() -> Value {
    json!({
        "catgCount": {
            "Taipei": 3,
            "Xinyi": 2,
            "Da'an": 1,
            "Tainan": 2,
            "Anping": 2,
            "Kaohsiung": 1,
            "高雄": 1
        },
        "catgRel": {
            "Taipei": ["Xinyi", "Da'an"],
            "Tainan": ["Anping"],
            "Kaohsiung": []
        }
    })
}

pub fn authors() -> Value {
    json!([
        { "name": "Mei Lin", "slug": "default", "occupation": "Writer" }
    ])
}
