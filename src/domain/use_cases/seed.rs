//! Sample portal content loaded into empty collections at startup.

use crate::entities::{
    company::NewCompany,
    faq::{FaqType, NewFaq},
    update::NewUpdate,
};

fn roles(list: &[&str]) -> Vec<String> {
    list.iter().map(|r| r.to_string()).collect()
}

pub fn sample_companies() -> Vec<NewCompany> {
    vec![
        NewCompany {
            name: "Google".into(),
            logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/53/Google_%22G%22_Logo.svg/1024px-Google_%22G%22_Logo.svg.png".into(),
            description: "Leading technology company specializing in internet-related services and products.".into(),
            eligibility: "CGPA ≥ 8.5, No backlogs".into(),
            visit_date: "10 Jun 2025".into(),
            roles: roles(&["SDE", "Data Scientist", "Product Manager"]),
        },
        NewCompany {
            name: "Microsoft".into(),
            logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/4/44/Microsoft_logo.svg/2048px-Microsoft_logo.svg.png".into(),
            description: "Global technology corporation that develops, manufactures, licenses, and sells computer software.".into(),
            eligibility: "CGPA ≥ 8.0, No backlogs".into(),
            visit_date: "15 Jun 2025".into(),
            roles: roles(&["Software Engineer", "Cloud Engineer", "UX Designer"]),
        },
        NewCompany {
            name: "Amazon".into(),
            logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a9/Amazon_logo.svg/2560px-Amazon_logo.svg.png".into(),
            description: "American multinational tech company focusing on e-commerce, cloud computing, and AI.".into(),
            eligibility: "CGPA ≥ 7.5, Max 2 backlogs".into(),
            visit_date: "22 Jun 2025".into(),
            roles: roles(&["SDE", "Business Analyst", "Operations"]),
        },
    ]
}

pub fn sample_faqs() -> Vec<NewFaq> {
    vec![
        NewFaq {
            question: "What is the time complexity of QuickSort algorithm?".into(),
            answer: "The average time complexity of QuickSort is O(n log n), but in the worst case, it can be O(n²).".into(),
            company: "Google".into(),
            faq_type: FaqType::Technical,
        },
        NewFaq {
            question: "Explain the difference between REST and GraphQL.".into(),
            answer: "REST is an architectural style for designing networked applications using standard HTTP methods. GraphQL is a query language for APIs.".into(),
            company: "Microsoft".into(),
            faq_type: FaqType::Technical,
        },
        NewFaq {
            question: "Tell us about a challenging situation in a team project.".into(),
            answer: "During my last internship, our team was working on a critical feature with a tight deadline...".into(),
            company: "Amazon".into(),
            faq_type: FaqType::Hr,
        },
    ]
}

pub fn sample_updates() -> Vec<NewUpdate> {
    vec![
        NewUpdate {
            title: "Google Recruitment Drive Announced".into(),
            content: "Google will be conducting an on-campus recruitment drive for 2025 batch students. Register before May 30.".into(),
            date: "15 May 2025".into(),
            is_new: true,
        },
        NewUpdate {
            title: "Pre-Placement Talk: Microsoft".into(),
            content: "Microsoft will be conducting a pre-placement talk on June 5. Mandatory for all registered students.".into(),
            date: "01 Jun 2025".into(),
            is_new: true,
        },
        NewUpdate {
            title: "Resume Building Workshop".into(),
            content: "Learn how to create an impressive resume that will catch the recruiter's eye.".into(),
            date: "25 May 2025".into(),
            is_new: false,
        },
    ]
}
