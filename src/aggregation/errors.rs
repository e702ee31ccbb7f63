
error_chain!{

    links {
        Store(crate::store::Error, crate::store::ErrorKind);
    }

    foreign_links {
        ParseInt(::std::num::ParseIntError);
    }

    errors {
        ChampionNotFound(id : u32) {
            description("champion missing from the quotient map")
            display("champion {} does not exist in quotient map", id)
        }
        UnknownSkill(skill : char) {
            description("unknown skill letter in a skill order key")
            display("unknown skill: {:?}", skill)
        }
        UnknownItem(item : String) {
            description("non-numeric item token in a build key")
            display("unknown item: {:?}", item)
        }
        MalformedBonusElement(element : String) {
            description("bonus set element does not match id:slot:count")
            display("malformed bonus set element: {:?}", element)
        }
        MalformedSummoners(key : String) {
            description("summoner spell key does not match id|id")
            display("malformed summoner spell pair: {:?}", key)
        }
    }
}
