#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

// Display order is the table order.
pub const FAQS: [FaqEntry; 6] = [
    FaqEntry {
        question: "What can I watch on Netflix?",
        answer: "Netflix has an extensive library of feature films, documentaries, TV programmes, anime, award-winning Netflix originals and more. Watch as much as you want, anytime you want.\n\nCheck out some of our content.",
    },
    FaqEntry {
        question: "What is Netflix?",
        answer: "Netflix is a streaming service that offers a wide variety of award-winning TV programmes, films, anime, documentaries and more – on thousands of internet-connected devices.\n\nYou can watch as much as you want, whenever you want, without a single advert – all for one low monthly price. There's always something new to discover, and new TV programmes and films are added every week!",
    },
    FaqEntry {
        question: "How much does Netflix cost?",
        answer: "Watch Netflix on your smartphone, tablet, smart TV, laptop or streaming device, all for one fixed monthly fee. Plans range from €7,99 to €15,99 a month. No extra costs, no contracts.",
    },
    FaqEntry {
        question: "Where can I watch?",
        answer: "Watch anywhere, anytime. Sign in with your Netflix account to watch instantly on the web at netflix.com from your personal computer or on any internet-connected device that offers the Netflix app, including smart TVs, smartphones, tablets, streaming media players and game consoles.\n\nYou can also download your favourite programmes with the iOS, Android, or Windows 10 app. Use downloads to watch while you're on the go and without an internet connection. Take Netflix with you anywhere.",
    },
    FaqEntry {
        question: "How do I cancel?",
        answer: "Netflix is flexible. There are no annoying contracts and no commitments. You can easily cancel your account online in two clicks. There are no cancellation fees – start or stop your account at any time.",
    },
    FaqEntry {
        question: "Is Netflix good for children?",
        answer: "The Netflix Children's experience is included in your membership to give parents control while children enjoy family-friendly TV programmes and films in their own space.\n\nChildren's profiles come with PIN-protected parental controls that let you restrict the maturity rating of content children can watch and block specific titles you don’t want children to see.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_holds_six_entries_in_display_order() {
        assert_eq!(FAQS.len(), 6);
        assert_eq!(FAQS[0].question, "What can I watch on Netflix?");
        assert_eq!(FAQS[2].question, "How much does Netflix cost?");
        assert_eq!(FAQS[5].question, "Is Netflix good for children?");
    }

    #[test]
    fn every_entry_has_text() {
        for entry in FAQS.iter() {
            assert!(!entry.question.trim().is_empty());
            assert!(!entry.answer.trim().is_empty());
        }
    }
}
