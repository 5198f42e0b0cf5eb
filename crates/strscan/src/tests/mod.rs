mod property_match_state;
