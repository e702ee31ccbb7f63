
error_chain!{

    foreign_links {
        Reqwest(::reqwest::Error);
    }

    errors {
        Decode {
            description("present row could not be decoded as a match sum")
            display("present row could not be decoded as a match sum")
        }
    }
}
