//! Certificate catalog

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// A certificate shown in the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub institution: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub download_url: &'static str,
}

const WLC: &str = "WESTERN LEYTE COLLEGE OF ORMOC CITY";

/// All certificates, in page order
pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: "topcit-10th",
        title: "10th TOPCIT Philippines Certificate",
        date: "2024",
        institution: WLC,
        kind: "Global Certification",
        description: "Successfully completed the 10th TOPCIT Philippines examination, demonstrating proficiency in information technology concepts and practical applications.",
        image: "./images/topcit (1).png",
        download_url: "./docs/certificates/topcit-10th.pdf",
    },
    Certificate {
        id: "topcit-11th",
        title: "11th TOPCIT Philippines Certificate",
        date: "2024",
        institution: WLC,
        kind: "Global Certification",
        description: "Achieved certification in the 11th TOPCIT Philippines examination, showcasing advanced IT knowledge and skills.",
        image: "./images/topcit (2).png",
        download_url: "./docs/certificates/topcit-11th.pdf",
    },
    Certificate {
        id: "topcit-12th",
        title: "12th TOPCIT Philippines Certificate",
        date: "2024",
        institution: WLC,
        kind: "Global Certification",
        description: "Earned the 12th TOPCIT Philippines certificate, validating expertise in information technology and computer science.",
        image: "./images/topcit (3).png",
        download_url: "./docs/certificates/topcit-12th.pdf",
    },
    Certificate {
        id: "excellence-programming",
        title: "Excellence in Programming Award",
        date: "2025",
        institution: WLC,
        kind: "Academic Award",
        description: "Recognized for outstanding performance and excellence in programming courses, demonstrating exceptional coding skills and problem-solving abilities.",
        image: "./images/certificates/excellence-programming.jpg",
        download_url: "./docs/certificates/excellence-programming.pdf",
    },
    Certificate {
        id: "best-capstone",
        title: "Best in Capstone Project Award",
        date: "2025",
        institution: WLC,
        kind: "Academic Award",
        description: "Awarded for developing the best capstone project, showcasing innovative thinking and technical implementation skills.",
        image: "./images/certificates/best-capstone.jpg",
        download_url: "./docs/certificates/best-capstone.pdf",
    },
    Certificate {
        id: "leadership-doice",
        title: "Leadership Certificate - DOICE",
        date: "2024",
        institution: "DOICE (CICTE Organization)",
        kind: "Leadership",
        description: "Served as an officer member in the DOICE organization, demonstrating leadership skills and community involvement.",
        image: "./images/certificates/leadership-doice.jpg",
        download_url: "./docs/certificates/leadership-doice.pdf",
    },
    Certificate {
        id: "programming-club",
        title: "Programming Club Membership",
        date: "2024",
        institution: "Western Leyte Programming Club",
        kind: "Community",
        description: "Active member of the Western Leyte Programming Club, contributing to the programming community and participating in various coding activities.",
        image: "./images/certificates/programming-club.jpg",
        download_url: "./docs/certificates/programming-club.pdf",
    },
];

static INDEX: OnceLock<FxHashMap<&'static str, &'static Certificate>> = OnceLock::new();

/// Look up a certificate by its `data-certificate` id
pub fn lookup(id: &str) -> Option<&'static Certificate> {
    INDEX
        .get_or_init(|| CERTIFICATES.iter().map(|cert| (cert.id, cert)).collect())
        .get(id)
        .copied()
}

impl Certificate {
    /// Suggested file name for the download link
    pub fn download_name(&self) -> String {
        format!("{}.pdf", self.title)
    }
}
